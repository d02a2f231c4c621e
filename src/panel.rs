//! Triangular LED panel
//!
//! Three segments on one strip, wound around a triangle that sits at one
//! of the six hexagon positions. The panel owns its deferred action queue
//! and runs the effect state machines when their steps come due.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Error;
use crate::color::{Rgb, rainbow_sample};
use crate::driver::PixelDriver;
use crate::effect::{
    BreatheCycle, FadeStep, FillDirection, FillRequest, PanelAction, SpinStep, speed_to_duration,
};
use crate::geometry::{CornerLocation, PanelShape, SideLocation, WindDirection, first_segment_side};
use crate::scheduler::{ActionQueue, Scheduled, drain_queue, fire_time};
use crate::segment::PanelSegment;
use crate::strip::LedStrip;

/// Maximum number of deferred actions per panel
pub const PANEL_ACTION_CAPACITY: usize = 16;

const NO_DELAY: Duration = Duration::from_millis(0);
const MIN_SPIN_STEP: Duration = Duration::from_millis(1);

/// Description of one physical panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriPanelConfig {
    /// Hardware output the strip is wired to (e.g. a GPIO pin)
    pub output: u8,
    pub led_count: u16,
    /// Position of the panel in the hexagon
    pub location: CornerLocation,
    pub wind: WindDirection,
    /// Corner where the strip's first pixel sits
    pub start_corner: CornerLocation,
}

impl TriPanelConfig {
    pub const fn new(
        output: u8,
        led_count: u16,
        location: CornerLocation,
        wind: WindDirection,
        start_corner: CornerLocation,
    ) -> Self {
        Self {
            output,
            led_count,
            location,
            wind,
            start_corner,
        }
    }
}

/// One triangular panel
///
/// N is the maximum number of LEDs on the strip.
pub struct TriPanel<D: PixelDriver, const N: usize> {
    config: TriPanelConfig,
    corner_at_center: CornerLocation,
    outer_side: SideLocation,
    segments: [PanelSegment; 3],
    segment_by_side: [Option<usize>; 4],
    strip: LedStrip<D, N>,
    actions: ActionQueue<PanelAction, PANEL_ACTION_CAPACITY>,
}

impl<D: PixelDriver, const N: usize> TriPanel<D, N> {
    /// Build a panel from its description and strip driver
    ///
    /// The strip is split into three nearly equal segments, assigned to
    /// sides starting at the side the strip begins on and following the
    /// winding.
    pub fn new(config: TriPanelConfig, driver: D) -> Result<Self, Error> {
        let count = config.led_count;
        if count < 3 {
            return Err(Error::InvalidLedCount { count, max: N });
        }
        let strip = LedStrip::new(driver, count)?;

        let invalid_start = Error::InvalidStartCorner {
            location: config.location,
            start: config.start_corner,
        };
        let shape = config.location.shape();
        let first = first_segment_side(config.start_corner, config.wind);
        let second = shape.next_side(first, config.wind).ok_or(invalid_start)?;
        let third = shape.next_side(second, config.wind).ok_or(invalid_start)?;

        let corner1 = (count - 2) / 3;
        let corner2 = corner1 * 2 + 1;
        let segments = [
            PanelSegment::new(first, 0, corner1, second, third),
            PanelSegment::new(second, corner1 + 1, corner2, third, first),
            PanelSegment::new(third, corner2 + 1, count - 1, first, second),
        ];

        let mut segment_by_side = [None; 4];
        for (index, segment) in segments.iter().enumerate() {
            segment_by_side[segment.side() as usize] = Some(index);
        }

        let corner_at_center = config.location.opposite();
        Ok(Self {
            config,
            corner_at_center,
            outer_side: corner_at_center.opposite_side(),
            segments,
            segment_by_side,
            strip,
            actions: ActionQueue::new(),
        })
    }

    pub const fn config(&self) -> &TriPanelConfig {
        &self.config
    }

    pub const fn location(&self) -> CornerLocation {
        self.config.location
    }

    pub const fn shape(&self) -> PanelShape {
        self.config.location.shape()
    }

    /// Corner touching the hexagon center
    pub const fn corner_at_center(&self) -> CornerLocation {
        self.corner_at_center
    }

    /// Side on the hexagon rim
    pub const fn outer_side(&self) -> SideLocation {
        self.outer_side
    }

    /// Segments in strip order
    pub const fn segments(&self) -> &[PanelSegment; 3] {
        &self.segments
    }

    pub fn segment(&self, side: SideLocation) -> Option<&PanelSegment> {
        self.segment_by_side[side as usize].map(|index| &self.segments[index])
    }

    /// Segment holding a strip index
    pub fn segment_of(&self, index: u16) -> Option<&PanelSegment> {
        self.segments.iter().find(|segment| segment.contains(index))
    }

    pub const fn strip(&self) -> &LedStrip<D, N> {
        &self.strip
    }

    pub fn driver(&self) -> &D {
        self.strip.driver()
    }

    pub fn driver_mut(&mut self) -> &mut D {
        self.strip.driver_mut()
    }

    pub fn pixel_count(&self) -> u16 {
        self.strip.len()
    }

    /// Deferred actions in firing order
    pub fn actions(&self) -> impl Iterator<Item = &Scheduled<PanelAction>> {
        self.actions.iter()
    }

    /// Whether any action or LED change is still waiting
    pub fn is_idle(&self) -> bool {
        self.actions.is_empty() && self.strip.pending_count() == 0
    }

    /// Initialize the driver, blank it and set the brightness
    pub fn begin(&mut self, brightness: u8) {
        let driver = self.strip.driver_mut();
        driver.init();
        driver.clear();
        self.set_brightness(brightness);
        self.strip.flush();
    }

    /// Run `action` after `delay`
    pub fn schedule(
        &mut self,
        delay: Duration,
        action: PanelAction,
        now: Instant,
    ) -> Result<(), Error> {
        self.schedule_at(fire_time(now, delay), action)
    }

    /// Drop every deferred action and pending LED change
    pub fn clear_actions(&mut self) {
        self.actions.clear();
        self.strip.clear_pending();
    }

    pub fn brightness(&self) -> u8 {
        self.strip.brightness()
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.strip.set_brightness(brightness);
    }

    /// Set every LED to `color`, now or after `delay`
    pub fn set_color(&mut self, color: Rgb, delay: Duration, now: Instant) -> Result<(), Error> {
        for segment in self.segments {
            segment.set_color(&mut self.strip, color, delay, now)?;
        }
        Ok(())
    }

    /// Stretch or squeeze `colors` over the whole strip
    ///
    /// Pixel `i` gets `colors[i * colors.len() / pixel_count]`.
    pub fn set_colors(
        &mut self,
        colors: &[Rgb],
        delay: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        if colors.is_empty() {
            return Ok(());
        }
        let count = usize::from(self.strip.len());
        for index in 0..self.strip.len() {
            let source = usize::from(index) * colors.len() / count;
            self.strip.set_color(index, colors[source], delay, now)?;
        }
        Ok(())
    }

    /// Current color of every LED
    pub fn colors(&self) -> Vec<Rgb, N> {
        self.strip.leds().iter().map(|led| led.color()).collect()
    }

    pub fn pixel_color(&self, index: u16) -> Result<Rgb, Error> {
        self.strip.color(index)
    }

    pub fn set_pixel_color(
        &mut self,
        index: u16,
        color: Rgb,
        delay: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        self.strip.set_color(index, color, delay, now)
    }

    /// Push the current color of a pixel to the driver again
    pub fn reset_pixel_color(&mut self, index: u16) -> Result<(), Error> {
        self.strip.reset(index)
    }

    /// Fill from the corner at the hexagon center
    pub fn fill_from_corner(
        &mut self,
        percent: f32,
        color: Rgb,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        self.fill_from(self.corner_at_center, percent, color, duration, now)
    }

    /// Sweep the two sides meeting at `corner` away from it
    ///
    /// Once both are completely lit, the opposite side follows after
    /// `duration`.
    pub fn fill_from(
        &mut self,
        corner: CornerLocation,
        percent: f32,
        color: Rgb,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        let (first, second, cap) = self.corner_segments(corner)?;

        let first_full = first.fill(&mut self.strip, percent, color, corner, duration, now)?;
        let second_full = second.fill(&mut self.strip, percent, color, corner, duration, now)?;
        if first_full && second_full {
            cap.set_color(&mut self.strip, color, duration, now)?;
        }
        Ok(())
    }

    /// Fill toward the corner at the hexagon center
    pub fn fill_to_corner(
        &mut self,
        percent: f32,
        color: Rgb,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        self.fill_to(self.corner_at_center, percent, color, duration, now)
    }

    /// Light the side opposite `corner`, then sweep the other two toward it
    pub fn fill_to(
        &mut self,
        corner: CornerLocation,
        percent: f32,
        color: Rgb,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        let (first, second, cap) = self.corner_segments(corner)?;

        cap.set_color(&mut self.strip, color, NO_DELAY, now)?;
        first.fill(&mut self.strip, -percent, color, corner, duration, now)?;
        second.fill(&mut self.strip, -percent, color, corner, duration, now)?;
        Ok(())
    }

    /// Fade brightness up to `max_brightness` over `duration`
    ///
    /// Does nothing if the panel is already at least that bright. With
    /// `constant_color` every pixel is pushed again after each step.
    pub fn fade_in(
        &mut self,
        max_brightness: u8,
        constant_color: bool,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        let current = self.brightness();
        if current >= max_brightness {
            return Ok(());
        }
        self.start_fade(current, max_brightness, constant_color, duration, now)
    }

    /// Fade brightness down to `min_brightness` over `duration`
    pub fn fade_out(
        &mut self,
        min_brightness: u8,
        constant_color: bool,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        let current = self.brightness();
        if current <= min_brightness {
            return Ok(());
        }
        self.start_fade(current, min_brightness, constant_color, duration, now)
    }

    /// Breathe between dark and `max_brightness` until actions are cleared
    ///
    /// With a color, the panel is painted with it first.
    pub fn breathe(
        &mut self,
        max_brightness: u8,
        fade: Duration,
        color: Option<Rgb>,
        now: Instant,
    ) -> Result<(), Error> {
        self.start_breathe(
            BreatheCycle {
                max_brightness,
                fade,
                color,
                constant_color: false,
            },
            now,
        )
    }

    /// Paint the rainbow gradient and spin it `loops` times
    ///
    /// Zero loops spins forever.
    pub fn rainbow(&mut self, loops: f32, speed: u8, now: Instant) -> Result<(), Error> {
        self.paint_rainbow(now)?;
        self.color_spin(loops, speed, now)
    }

    /// Paint the rainbow gradient and spin it for about `duration`
    #[allow(clippy::cast_precision_loss)]
    pub fn rainbow_timed(
        &mut self,
        duration: Duration,
        speed: u8,
        now: Instant,
    ) -> Result<(), Error> {
        self.paint_rainbow(now)?;
        let loops = duration.as_millis() as f32 / speed_to_duration(speed).as_millis() as f32;
        if loops > 0.0 {
            self.color_spin(loops, speed, now)?;
        }
        Ok(())
    }

    /// Rotate the strip colors one pixel per step, `loops` full turns
    ///
    /// The strip winding sets the direction. Zero loops spins forever.
    pub fn color_spin(&mut self, loops: f32, speed: u8, now: Instant) -> Result<(), Error> {
        match SpinStep::plan(self.strip.len(), loops, speed, self.config.wind) {
            Some(step) => self.schedule_at(now, PanelAction::Spin(step)),
            None => Ok(()),
        }
    }

    /// Rotate every color by one pixel
    #[allow(clippy::cast_possible_truncation)]
    pub fn rotate(&mut self, direction: WindDirection, now: Instant) -> Result<(), Error> {
        let mut colors = self.colors();
        match direction {
            WindDirection::Clockwise => colors.rotate_right(1),
            WindDirection::CounterClockwise => colors.rotate_left(1),
        }
        for (index, &color) in colors.iter().enumerate() {
            self.strip.set_color(index as u16, color, NO_DELAY, now)?;
        }
        Ok(())
    }

    /// Process one tick
    ///
    /// Runs due actions, applies due LED changes and flushes the driver if
    /// anything changed. Returns `true` if the driver was flushed.
    pub fn show(&mut self, now: Instant) -> bool {
        drain_queue(self, |panel| &mut panel.actions, now, |panel, entry| {
            if let Err(_error) = panel.run(entry) {
                #[cfg(feature = "esp32-log")]
                println!("[TriPanel.show] {:?} action failed: {}", panel.config.location, _error);
            }
        });
        self.strip.apply_due(now);
        self.strip.flush()
    }

    fn run(&mut self, entry: Scheduled<PanelAction>) -> Result<(), Error> {
        let now = entry.fire_at;
        match entry.action {
            PanelAction::SetColor(color) => self.set_color(color, NO_DELAY, now),
            PanelAction::SetBrightness(brightness) => {
                self.set_brightness(brightness);
                Ok(())
            }
            PanelAction::Fade(step) => {
                self.set_brightness(step.level);
                if step.constant_color {
                    self.strip.reset_all();
                }
                match step.next() {
                    Some(next) => {
                        self.schedule_at(fire_time(now, step.step), PanelAction::Fade(next))
                    }
                    None => Ok(()),
                }
            }
            PanelAction::FadeOut {
                min,
                constant_color,
                duration,
            } => self.fade_out(min, constant_color, duration, now),
            PanelAction::Breathe(cycle) => self.start_breathe(cycle, now),
            PanelAction::Spin(step) => {
                self.rotate(step.direction, now)?;
                // A zero spacing would refire within the same drain forever
                let spacing = step.step.max(MIN_SPIN_STEP);
                match step.next() {
                    Some(next) => {
                        self.schedule_at(fire_time(now, spacing), PanelAction::Spin(next))
                    }
                    None => Ok(()),
                }
            }
            PanelAction::Rainbow { loops, speed } => self.rainbow(loops, speed, now),
            PanelAction::Fill(request) => self.fill(request, now),
        }
    }

    fn fill(&mut self, request: FillRequest, now: Instant) -> Result<(), Error> {
        let corner = request.corner.unwrap_or(self.corner_at_center);
        match request.direction {
            FillDirection::FromCorner => {
                self.fill_from(corner, request.percent, request.color, request.duration, now)
            }
            FillDirection::ToCorner => {
                self.fill_to(corner, request.percent, request.color, request.duration, now)
            }
        }
    }

    fn start_fade(
        &mut self,
        from: u8,
        to: u8,
        constant_color: bool,
        duration: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        match FadeStep::plan(from, to, duration, constant_color) {
            Some(step) => self.schedule_at(fire_time(now, step.step), PanelAction::Fade(step)),
            None => Ok(()),
        }
    }

    fn start_breathe(&mut self, cycle: BreatheCycle, now: Instant) -> Result<(), Error> {
        let mut constant_color = cycle.constant_color || self.is_idle();
        if let Some(color) = cycle.color {
            self.set_color(color, NO_DELAY, now)?;
            constant_color = true;
        }
        self.set_brightness(0);

        self.fade_in(cycle.max_brightness, constant_color, cycle.fade, now)?;
        self.schedule(
            cycle.fade_out_delay(),
            PanelAction::FadeOut {
                min: 0,
                constant_color,
                duration: cycle.fade,
            },
            now,
        )?;
        self.schedule(
            cycle.period(),
            PanelAction::Breathe(BreatheCycle {
                constant_color,
                ..cycle
            }),
            now,
        )
    }

    fn paint_rainbow(&mut self, now: Instant) -> Result<(), Error> {
        let count = self.strip.len();
        for index in 0..count {
            let color = rainbow_sample(usize::from(index), usize::from(count));
            self.strip.set_color(index, color, NO_DELAY, now)?;
        }
        Ok(())
    }

    /// Segments on both sides of `corner` and the one facing it
    fn corner_segments(
        &self,
        corner: CornerLocation,
    ) -> Result<(PanelSegment, PanelSegment, PanelSegment), Error> {
        let (vertical, horizontal) = corner.adjacent_sides();
        let lookup = |side: SideLocation| {
            self.segment(side)
                .copied()
                .ok_or(Error::CornerNotOnPanel { corner })
        };
        Ok((lookup(vertical)?, lookup(horizontal)?, lookup(corner.opposite_side())?))
    }

    fn schedule_at(&mut self, fire_at: Instant, action: PanelAction) -> Result<(), Error> {
        self.actions.schedule_at(fire_at, action).map_err(|_action| {
            #[cfg(feature = "esp32-log")]
            println!("[TriPanel.schedule] action queue full, dropping {:?}", _action);
            Error::QueueFull
        })
    }
}
