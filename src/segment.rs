//! One side of a triangular panel
//!
//! A segment is a contiguous run of strip pixels along one side. Its
//! geometry never changes after construction; the LEDs themselves live in
//! the panel's [`LedStrip`].

use core::ops::Range;

use embassy_time::{Duration, Instant};
use libm::{fabsf, roundf};

use crate::Error;
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::geometry::{CornerLocation, SideLocation};
use crate::strip::LedStrip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelSegment {
    side: SideLocation,
    start: u16,
    len: u16,
    next_side: SideLocation,
    prev_side: SideLocation,
}

impl PanelSegment {
    /// Segment covering strip pixels `min..=max`
    ///
    /// `next_side` and `prev_side` are the neighbouring segments in strip order.
    pub const fn new(
        side: SideLocation,
        min: u16,
        max: u16,
        next_side: SideLocation,
        prev_side: SideLocation,
    ) -> Self {
        Self {
            side,
            start: min,
            len: max + 1 - min,
            next_side,
            prev_side,
        }
    }

    pub const fn side(&self) -> SideLocation {
        self.side
    }

    pub const fn next_side(&self) -> SideLocation {
        self.next_side
    }

    pub const fn prev_side(&self) -> SideLocation {
        self.prev_side
    }

    /// First strip index of the segment
    pub const fn min_index(&self) -> u16 {
        self.start
    }

    /// Last strip index of the segment
    pub const fn max_index(&self) -> u16 {
        self.start + self.len.saturating_sub(1)
    }

    pub const fn len(&self) -> u16 {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn contains(&self, index: u16) -> bool {
        index >= self.start && index - self.start < self.len
    }

    /// Strip indices covered by the segment
    pub const fn pixels(&self) -> Range<u16> {
        self.start..self.start + self.len
    }

    /// Color every LED of the segment
    pub fn set_color<D: PixelDriver, const N: usize>(
        &self,
        strip: &mut LedStrip<D, N>,
        color: Rgb,
        delay: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        for index in self.pixels() {
            strip.set_color(index, color, delay, now)?;
        }
        Ok(())
    }

    /// Sweep `color` along the segment starting from `corner`
    ///
    /// `percent` (clamped to -1..=1) sets how much of the segment is filled.
    /// A negative value walks from the far end toward `corner` instead.
    /// LEDs are spread evenly over `duration`; zero applies them all at once.
    ///
    /// Returns `true` if every LED of the segment got the color.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn fill<D: PixelDriver, const N: usize>(
        &self,
        strip: &mut LedStrip<D, N>,
        percent: f32,
        color: Rgb,
        corner: CornerLocation,
        duration: Duration,
        now: Instant,
    ) -> Result<bool, Error> {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(-1.0, 1.0)
        };

        let opposing_side = corner.other_side(self.side);
        let walk_back = (self.next_side == opposing_side) == (percent > 0.0);
        let to_fill = (roundf(f32::from(self.len) * fabsf(percent)) as u16).min(self.len);
        let step_ms = if to_fill == 0 {
            0
        } else {
            duration.as_millis() / u64::from(to_fill)
        };

        for step in 0..to_fill {
            let offset = if walk_back { self.len - 1 - step } else { step };
            let delay = Duration::from_millis(step_ms * u64::from(step));
            strip.set_color(self.start + offset, color, delay, now)?;
        }

        Ok(to_fill == self.len)
    }
}
