//! Scheduled panel effects
//!
//! Every deferred piece of work is one variant of [`PanelAction`]. Effects
//! that run over many ticks are small state machines: each firing applies
//! one step and schedules the next one, so the queue holds only a few
//! entries no matter how long the animation is.

mod breathe;
mod fade;
mod fill;
mod spin;

use embassy_time::Duration;

pub use breathe::BreatheCycle;
pub use fade::FadeStep;
pub use fill::{FillDirection, FillRequest};
pub use spin::SpinStep;

use crate::color::Rgb;

/// Work a panel can defer to a later tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelAction {
    /// Set every LED to one color
    SetColor(Rgb),
    /// Set the strip brightness
    SetBrightness(u8),
    /// Apply one brightness level of a fade
    Fade(FadeStep),
    /// Start fading down from whatever brightness the panel has by then
    FadeOut {
        min: u8,
        constant_color: bool,
        duration: Duration,
    },
    /// Start one breathing cycle
    Breathe(BreatheCycle),
    /// Rotate the strip colors by one pixel
    Spin(SpinStep),
    /// Paint the rainbow gradient and spin it
    Rainbow { loops: f32, speed: u8 },
    /// Fill from or toward a corner
    Fill(FillRequest),
}

/// Rotation period for an 8-bit speed value
///
/// 0 is the slowest (about 128 s per rotation), 255 the fastest (512 ms).
/// The period is always a multiple of 256 ms.
pub const fn speed_to_duration(speed: u8) -> Duration {
    let scaled = 128_000 - 500 * speed as u64;
    // Round half up to whole 256 ms units
    let units = (scaled + 128) / 256;
    Duration::from_millis(units * 256)
}
