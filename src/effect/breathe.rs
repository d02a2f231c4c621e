use embassy_time::Duration;

use crate::color::Rgb;

/// Parameters of a self-repeating breathing cycle
///
/// A cycle fades in over `fade`, holds, starts fading out at 1.5 x `fade`
/// and starts the next cycle at 2.5 x `fade`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreatheCycle {
    pub max_brightness: u8,
    pub fade: Duration,
    pub color: Option<Rgb>,
    pub constant_color: bool,
}

impl BreatheCycle {
    /// Delay from cycle start to the beginning of the fade-out
    pub fn fade_out_delay(&self) -> Duration {
        Duration::from_millis(self.fade.as_millis() * 3 / 2)
    }

    /// Delay from cycle start to the next cycle, never zero
    pub fn period(&self) -> Duration {
        Duration::from_millis((self.fade.as_millis() * 5 / 2).max(1))
    }
}
