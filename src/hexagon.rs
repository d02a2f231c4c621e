//! Six panels arranged into a hexagon
//!
//! ```text
//!   1  2  3
//!   /\ \/ /\
//!   \/ /\ \/
//!   6  5  4
//! ```
//!
//! The hexagon owns the animation clock and a queue for choreography
//! across panels; everything else is forwarded to the panels.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Error;
use crate::clock::Clock;
use crate::color::{BLACK, Rgb};
use crate::driver::PixelDriver;
use crate::geometry::{CornerLocation, WindDirection};
use crate::panel::{TriPanel, TriPanelConfig};
use crate::scheduler::{ActionQueue, Scheduled, drain_queue};

pub const PANEL_COUNT: usize = 6;

/// Maximum number of deferred hexagon actions
pub const HEXAGON_ACTION_CAPACITY: usize = 16;

const NO_DELAY: Duration = Duration::from_millis(0);

/// Validated set of six panel descriptions, one per corner location
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HexagonConfig {
    panels: [TriPanelConfig; PANEL_COUNT],
}

impl HexagonConfig {
    /// Check that `panels` covers every corner location exactly once
    ///
    /// Panel order is kept: panel `i` of the hexagon is `panels[i]`.
    pub fn new(panels: &[TriPanelConfig]) -> Result<Self, Error> {
        let result = Self::validate(panels);
        if let Err(_error) = &result {
            #[cfg(feature = "esp32-log")]
            println!("[HexagonConfig.new] invalid panel layout: {}", _error);
        }
        result
    }

    /// The stock layout: 80 LEDs per panel
    pub const fn default_layout() -> Self {
        use CornerLocation::{LeftBottom, LeftTop, MiddleBottom, MiddleTop, RightBottom, RightTop};
        use WindDirection::{Clockwise, CounterClockwise};

        Self {
            panels: [
                TriPanelConfig::new(5, 80, LeftTop, Clockwise, RightBottom),
                TriPanelConfig::new(10, 80, MiddleTop, Clockwise, MiddleBottom),
                TriPanelConfig::new(6, 80, RightTop, CounterClockwise, LeftBottom),
                TriPanelConfig::new(11, 80, RightBottom, CounterClockwise, RightBottom),
                TriPanelConfig::new(12, 80, MiddleBottom, Clockwise, RightBottom),
                TriPanelConfig::new(9, 80, LeftBottom, CounterClockwise, RightTop),
            ],
        }
    }

    pub const fn panels(&self) -> &[TriPanelConfig; PANEL_COUNT] {
        &self.panels
    }

    fn validate(panels: &[TriPanelConfig]) -> Result<Self, Error> {
        let mut seen = [false; PANEL_COUNT];
        for (panel, config) in panels.iter().enumerate() {
            let slot = &mut seen[config.location.index()];
            if *slot {
                return Err(Error::DuplicateLocation {
                    panel,
                    location: config.location,
                });
            }
            *slot = true;
        }

        if let Some(location) = CornerLocation::ALL
            .into_iter()
            .find(|location| !seen[location.index()])
        {
            return Err(Error::MissingLocation { location });
        }

        let mut configs = [panels[0]; PANEL_COUNT];
        configs.copy_from_slice(panels);
        Ok(Self { panels: configs })
    }
}

impl Default for HexagonConfig {
    fn default() -> Self {
        Self::default_layout()
    }
}

/// Work the hexagon can defer to a later tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HexagonAction {
    /// Move every panel's colors to the next panel
    ColorShift(Duration),
    SetColor(Rgb),
    SetBrightness(u8),
    Breathe {
        max_brightness: u8,
        fade: Duration,
        color: Option<Rgb>,
    },
    Rainbow {
        loops: f32,
        speed: u8,
    },
    RainbowTimed {
        duration: Duration,
        speed: u8,
    },
    /// Drop every panel's deferred work
    ClearPanels,
}

/// Hexagon of six triangular panels
///
/// N is the maximum number of LEDs per panel.
pub struct Hexagon<D: PixelDriver, const N: usize> {
    panels: Vec<TriPanel<D, N>, PANEL_COUNT>,
    actions: ActionQueue<HexagonAction, HEXAGON_ACTION_CAPACITY>,
    clock: Clock,
}

impl<D: PixelDriver, const N: usize> Hexagon<D, N> {
    /// Build the panels described by `config`
    ///
    /// `make_driver` creates the strip driver for each panel description.
    pub fn new<F>(config: &HexagonConfig, mut make_driver: F) -> Result<Self, Error>
    where
        F: FnMut(&TriPanelConfig) -> D,
    {
        let mut panels = Vec::new();
        for panel_config in config.panels() {
            let panel = TriPanel::new(*panel_config, make_driver(panel_config))?;
            let _ = panels.push(panel);
        }

        Ok(Self {
            panels,
            actions: ActionQueue::new(),
            clock: Clock::default(),
        })
    }

    /// Build the stock layout
    pub fn with_default_layout<F>(make_driver: F) -> Result<Self, Error>
    where
        F: FnMut(&TriPanelConfig) -> D,
    {
        Self::new(&HexagonConfig::default_layout(), make_driver)
    }

    /// Panels in configuration order
    pub fn panels(&self) -> &[TriPanel<D, N>] {
        &self.panels
    }

    pub fn panels_mut(&mut self) -> &mut [TriPanel<D, N>] {
        &mut self.panels
    }

    pub fn panel(&self, index: usize) -> Option<&TriPanel<D, N>> {
        self.panels.get(index)
    }

    pub fn panel_mut(&mut self, index: usize) -> Option<&mut TriPanel<D, N>> {
        self.panels.get_mut(index)
    }

    /// Panel placed at `location`
    pub fn panel_at(&self, location: CornerLocation) -> Option<&TriPanel<D, N>> {
        self.panels.iter().find(|panel| panel.location() == location)
    }

    /// Time of the last tick
    pub const fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Deferred hexagon actions in firing order
    pub fn actions(&self) -> impl Iterator<Item = &Scheduled<HexagonAction>> {
        self.actions.iter()
    }

    /// Start every panel at `brightness`, all LEDs black
    pub fn begin(&mut self, now: Instant, brightness: u8) -> Result<(), Error> {
        self.clock.advance(now);
        for panel in &mut self.panels {
            panel.begin(brightness);
        }
        self.set_color(BLACK, NO_DELAY)
    }

    /// Run `action` after `delay`
    pub fn schedule(&mut self, delay: Duration, action: HexagonAction) -> Result<(), Error> {
        self.actions
            .schedule_after(self.clock.now(), delay, action)
            .map_err(|_action| {
                #[cfg(feature = "esp32-log")]
                println!("[Hexagon.schedule] action queue full, dropping {:?}", _action);
                Error::QueueFull
            })
    }

    /// Drop every deferred action, on the hexagon and on all panels
    pub fn clear_actions(&mut self) {
        for panel in &mut self.panels {
            panel.clear_actions();
        }
        self.actions.clear();
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        for panel in &mut self.panels {
            panel.set_brightness(brightness);
        }
    }

    pub fn set_color(&mut self, color: Rgb, delay: Duration) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.set_color(color, delay, now))
    }

    pub fn breathe(
        &mut self,
        max_brightness: u8,
        fade: Duration,
        color: Option<Rgb>,
    ) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.breathe(max_brightness, fade, color, now))
    }

    pub fn rainbow(&mut self, loops: f32, speed: u8) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.rainbow(loops, speed, now))
    }

    pub fn rainbow_timed(&mut self, duration: Duration, speed: u8) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.rainbow_timed(duration, speed, now))
    }

    pub fn color_spin(&mut self, loops: f32, speed: u8) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.color_spin(loops, speed, now))
    }

    /// Fill every panel from its corner at the hexagon center
    pub fn fill_from_corner(
        &mut self,
        percent: f32,
        color: Rgb,
        duration: Duration,
    ) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.fill_from_corner(percent, color, duration, now))
    }

    /// Fill every panel toward its corner at the hexagon center
    pub fn fill_to_corner(
        &mut self,
        percent: f32,
        color: Rgb,
        duration: Duration,
    ) -> Result<(), Error> {
        let now = self.clock.now();
        self.for_each_panel(|panel| panel.fill_to_corner(percent, color, duration, now))
    }

    /// Rotate panel colors around the ring
    ///
    /// Panel `i` takes the colors panel `i - 1` has now, panel 0 takes the
    /// last panel's. All panels change after the same `delay`.
    pub fn color_shift(&mut self, delay: Duration) -> Result<(), Error> {
        let now = self.clock.now();
        let Some(last) = self.panels.last().map(TriPanel::colors) else {
            return Ok(());
        };
        for index in (1..self.panels.len()).rev() {
            let previous = self.panels[index - 1].colors();
            self.panels[index].set_colors(&previous, delay, now)?;
        }
        self.panels[0].set_colors(&last, delay, now)
    }

    /// Process one tick
    ///
    /// Advances the clock to `now`, runs due hexagon actions, then lets
    /// every panel run its own work and flush. Returns the number of
    /// panels flushed.
    pub fn show(&mut self, now: Instant) -> usize {
        let now = self.clock.advance(now);
        drain_queue(self, |hexagon| &mut hexagon.actions, now, |hexagon, entry| {
            if let Err(_error) = hexagon.run(entry) {
                #[cfg(feature = "esp32-log")]
                println!("[Hexagon.show] action failed: {}", _error);
            }
        });

        let mut flushed = 0;
        for panel in &mut self.panels {
            if panel.show(now) {
                flushed += 1;
            }
        }
        flushed
    }

    fn run(&mut self, entry: Scheduled<HexagonAction>) -> Result<(), Error> {
        match entry.action {
            HexagonAction::ColorShift(delay) => self.color_shift(delay),
            HexagonAction::SetColor(color) => self.set_color(color, NO_DELAY),
            HexagonAction::SetBrightness(brightness) => {
                self.set_brightness(brightness);
                Ok(())
            }
            HexagonAction::Breathe {
                max_brightness,
                fade,
                color,
            } => self.breathe(max_brightness, fade, color),
            HexagonAction::Rainbow { loops, speed } => self.rainbow(loops, speed),
            HexagonAction::RainbowTimed { duration, speed } => self.rainbow_timed(duration, speed),
            HexagonAction::ClearPanels => {
                for panel in &mut self.panels {
                    panel.clear_actions();
                }
                Ok(())
            }
        }
    }

    fn for_each_panel<F>(&mut self, mut apply: F) -> Result<(), Error>
    where
        F: FnMut(&mut TriPanel<D, N>) -> Result<(), Error>,
    {
        for panel in &mut self.panels {
            apply(panel)?;
        }
        Ok(())
    }
}
