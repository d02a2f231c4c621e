//! Animation clock
//!
//! A single monotonic time value, advanced by the caller once per tick.

use embassy_time::Instant;

/// Monotonic, non-decreasing animation time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Clock {
    now: Instant,
}

impl Clock {
    /// Create a clock starting at `start`
    pub const fn new(start: Instant) -> Self {
        Self { now: start }
    }

    /// Current clock value
    pub const fn now(&self) -> Instant {
        self.now
    }

    /// Move the clock forward to `now`
    ///
    /// Values earlier than the current time are ignored, so the clock
    /// never runs backwards. Returns the resulting clock value.
    pub fn advance(&mut self, now: Instant) -> Instant {
        if now > self.now {
            self.now = now;
        }
        self.now
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(Instant::from_millis(0))
    }
}
