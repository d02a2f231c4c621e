use embassy_time::Duration;
use libm::ceilf;

use super::speed_to_duration;
use crate::geometry::WindDirection;

/// One single-pixel rotation of a color spin
///
/// `remaining` counts this step and the ones after it; `None` spins forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpinStep {
    pub remaining: Option<u32>,
    pub step: Duration,
    pub direction: WindDirection,
}

impl SpinStep {
    /// First step of a spin over `pixel_count` pixels
    ///
    /// `loops` full rotations are performed, fractional loops round up to
    /// whole steps. Zero loops spins forever; negative loops do nothing.
    /// Steps are `speed_to_duration(speed) / pixel_count` apart, at least 1 ms.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn plan(pixel_count: u16, loops: f32, speed: u8, direction: WindDirection) -> Option<Self> {
        if pixel_count == 0 || loops.is_nan() || loops < 0.0 {
            return None;
        }
        let remaining = if loops == 0.0 {
            None
        } else {
            Some(ceilf(f32::from(pixel_count) * loops) as u32)
        };
        Self::with_steps(pixel_count, remaining, speed, direction)
    }

    /// First step of a spin with an explicit step count
    pub fn with_steps(
        pixel_count: u16,
        remaining: Option<u32>,
        speed: u8,
        direction: WindDirection,
    ) -> Option<Self> {
        if pixel_count == 0 || remaining == Some(0) {
            return None;
        }
        let step_ms = (speed_to_duration(speed).as_millis() / u64::from(pixel_count)).max(1);
        Some(Self {
            remaining,
            step: Duration::from_millis(step_ms),
            direction,
        })
    }

    /// The step after this one, or `None` when the spin is over
    pub fn next(self) -> Option<Self> {
        let remaining = match self.remaining {
            None => None,
            Some(0 | 1) => return None,
            Some(n) => Some(n - 1),
        };
        Some(Self { remaining, ..self })
    }
}
