//! LED storage of one panel
//!
//! Owns the pixels, the driver and the delayed-LED queue, and keeps the
//! changed flag that decides whether the driver needs a flush.

use embassy_time::{Duration, Instant};
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::Error;
use crate::color::Rgb;
use crate::driver::PixelDriver;
use crate::led::{DelayedLedQueue, Led};
use crate::scheduler::fire_time;

/// Pixels of one physical strip together with their driver
///
/// N is the maximum number of LEDs.
pub struct LedStrip<D: PixelDriver, const N: usize> {
    driver: D,
    leds: Vec<Led, N>,
    delayed: DelayedLedQueue<N>,
    changed: bool,
}

impl<D: PixelDriver, const N: usize> LedStrip<D, N> {
    /// Create a strip of `count` LEDs on `driver`
    ///
    /// The count must fit both N and the driver's pixel count.
    pub fn new(driver: D, count: u16) -> Result<Self, Error> {
        let max = N.min(usize::from(driver.pixel_count()));
        if usize::from(count) > max {
            return Err(Error::InvalidLedCount { count, max });
        }

        let mut leds = Vec::new();
        for index in 0..count {
            let _ = leds.push(Led::new(index));
        }

        Ok(Self {
            driver,
            leds,
            delayed: DelayedLedQueue::new(),
            changed: true,
        })
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn len(&self) -> u16 {
        self.leds.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.leds.is_empty()
    }

    pub fn leds(&self) -> &[Led] {
        &self.leds
    }

    pub fn led(&self, index: u16) -> Result<&Led, Error> {
        self.leds.get(usize::from(index)).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.len(),
        })
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    /// Current color of a pixel
    pub fn color(&self, index: u16) -> Result<Rgb, Error> {
        self.led(index).map(Led::color)
    }

    /// Set a pixel color now (`delay` of zero) or after `delay`
    ///
    /// A delayed change replaces any change already pending for the pixel.
    pub fn set_color(
        &mut self,
        index: u16,
        color: Rgb,
        delay: Duration,
        now: Instant,
    ) -> Result<(), Error> {
        self.led(index)?;
        if delay.as_ticks() == 0 {
            self.apply(index, color);
        } else {
            let led = &mut self.leds[usize::from(index)];
            led.set_later(color, fire_time(now, delay));
            self.delayed.enroll(&self.leds, index);
        }
        Ok(())
    }

    /// Push the current color of a pixel to the driver again
    ///
    /// Used after a brightness change so already set colors get rescaled.
    pub fn reset(&mut self, index: u16) -> Result<(), Error> {
        let color = self.color(index)?;
        self.driver.set_pixel_color(index, color);
        self.changed = true;
        Ok(())
    }

    /// Push every pixel to the driver again
    pub fn reset_all(&mut self) {
        for led in &self.leds {
            self.driver.set_pixel_color(led.index(), led.color());
        }
        self.changed = true;
    }

    /// Apply every pending color change due before `now`
    ///
    /// Returns the number of pixels changed.
    pub fn apply_due(&mut self, now: Instant) -> usize {
        let mut applied = 0;
        while let Some(index) = self.delayed.pop_due(&self.leds, now) {
            if let Some(pending) = self.leds[usize::from(index)].pending() {
                self.apply(index, pending.color);
                applied += 1;
            }
        }
        applied
    }

    /// Number of pixels with a pending change
    pub fn pending_count(&self) -> usize {
        self.delayed.len()
    }

    /// Drop every pending change without applying it
    pub fn clear_pending(&mut self) {
        for index in self.delayed.indices() {
            if let Some(led) = self.leds.get_mut(usize::from(*index)) {
                let color = led.color();
                led.set_now(color);
            }
        }
        self.delayed.clear();
    }

    pub fn brightness(&self) -> u8 {
        self.driver.brightness()
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.driver.set_brightness(brightness);
        self.changed = true;
    }

    pub const fn is_changed(&self) -> bool {
        self.changed
    }

    /// Flush the driver if anything changed since the last flush
    ///
    /// The changed flag is kept on failure so the next call retries.
    /// Returns `true` if a flush happened.
    pub fn flush(&mut self) -> bool {
        if !self.changed {
            return false;
        }
        match self.driver.flush() {
            Ok(()) => {
                self.changed = false;
                true
            }
            Err(_error) => {
                #[cfg(feature = "esp32-log")]
                println!("[LedStrip.flush] driver flush failed: {:?}", _error);
                false
            }
        }
    }

    fn apply(&mut self, index: u16, color: Rgb) {
        self.leds[usize::from(index)].set_now(color);
        self.delayed.remove(index);
        self.driver.set_pixel_color(index, color);
        self.changed = true;
    }
}
