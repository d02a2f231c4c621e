//! Single addressable pixels and the queue of pixels waiting for a color change

use embassy_time::Instant;
use heapless::Vec;

use crate::color::{BLACK, Rgb};

/// Color change waiting for its fire time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingColor {
    pub color: Rgb,
    pub fire_at: Instant,
}

/// One addressable pixel of a strip
///
/// Holds at most one pending transition; scheduling another one replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Led {
    index: u16,
    current: Rgb,
    pending: Option<PendingColor>,
}

impl Led {
    pub const fn new(index: u16) -> Self {
        Self {
            index,
            current: BLACK,
            pending: None,
        }
    }

    /// Position of the pixel on its strip
    pub const fn index(&self) -> u16 {
        self.index
    }

    /// Color currently shown
    pub const fn color(&self) -> Rgb {
        self.current
    }

    pub const fn pending(&self) -> Option<PendingColor> {
        self.pending
    }

    /// Set the color now, dropping any pending transition
    pub(crate) fn set_now(&mut self, color: Rgb) {
        self.pending = None;
        self.current = color;
    }

    /// Record a transition to `color` at `fire_at`
    pub(crate) fn set_later(&mut self, color: Rgb, fire_at: Instant) {
        self.pending = Some(PendingColor { color, fire_at });
    }
}

/// LEDs with pending transitions, kept sorted by fire time
///
/// Stores strip indices only; fire times live in each [`Led`]. There is at
/// most one entry per LED, so N (the strip capacity) is always enough.
#[derive(Debug, Default)]
pub struct DelayedLedQueue<const N: usize> {
    order: Vec<u16, N>,
}

impl<const N: usize> DelayedLedQueue<N> {
    pub const fn new() -> Self {
        Self { order: Vec::new() }
    }

    /// Put `index` at the position matching its pending fire time
    ///
    /// An existing entry for the same LED is replaced.
    pub fn enroll(&mut self, leds: &[Led], index: u16) {
        self.remove(index);
        let Some(fire_at) = fire_time_of(leds, index) else {
            return;
        };

        let position = self
            .order
            .iter()
            .position(|&queued| fire_time_of(leds, queued).is_some_and(|t| t > fire_at))
            .unwrap_or(self.order.len());
        // One entry per LED, never exceeds N
        let _ = self.order.insert(position, index);
    }

    /// Drop the entry for `index`, if any
    pub fn remove(&mut self, index: u16) {
        if let Some(position) = self.order.iter().position(|&queued| queued == index) {
            self.order.remove(position);
        }
    }

    /// Pop the earliest LED whose fire time is strictly before `now`
    pub fn pop_due(&mut self, leds: &[Led], now: Instant) -> Option<u16> {
        loop {
            let &first = self.order.first()?;
            match fire_time_of(leds, first) {
                Some(fire_at) if fire_at < now => return Some(self.order.remove(0)),
                Some(_) => return None,
                // Stale entry, the LED was set directly in the meantime
                None => {
                    self.order.remove(0);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Queued strip indices in firing order
    pub fn indices(&self) -> &[u16] {
        &self.order
    }
}

fn fire_time_of(leds: &[Led], index: u16) -> Option<Instant> {
    leds.get(usize::from(index))?.pending.map(|pending| pending.fire_at)
}
