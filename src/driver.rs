//! Pixel strip driver abstraction
//!
//! Everything that talks to real hardware (bit timing, strip buffers,
//! brightness scaling) lives behind [`PixelDriver`]. The panels only set
//! pixels and ask for a flush.

use core::convert::Infallible;

use heapless::Vec;
use smart_leds::{SmartLedsWrite, brightness};

use crate::color::{BLACK, Rgb};
use crate::math8::scale_color;

/// Abstract pixel strip driver
///
/// Implement this trait to support different hardware platforms.
/// Panels are generic over this trait.
pub trait PixelDriver {
    /// Error reported when pushing the buffer to hardware fails
    type Error: core::fmt::Debug;

    /// Prepare the hardware output
    fn init(&mut self) {}

    /// Set every buffered pixel to black
    fn clear(&mut self);

    /// Number of pixels on the strip
    fn pixel_count(&self) -> u16;

    /// Buffered color of a pixel
    fn pixel_color(&self, index: u16) -> Rgb;

    /// Write a pixel into the buffer
    fn set_pixel_color(&mut self, index: u16, color: Rgb);

    fn brightness(&self) -> u8;

    fn set_brightness(&mut self, brightness: u8);

    /// Push the buffer to the hardware
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// In-memory driver keeping the buffer and the last flushed frame
///
/// N is the maximum number of pixels.
#[derive(Debug, Clone)]
pub struct MemoryDriver<const N: usize> {
    pixels: Vec<Rgb, N>,
    frame: Vec<Rgb, N>,
    brightness: u8,
    flushes: usize,
    initialized: bool,
}

impl<const N: usize> MemoryDriver<N> {
    /// Create a driver with `count` black pixels (at most N)
    pub fn new(count: u16) -> Self {
        let count = usize::from(count).min(N);
        let mut pixels = Vec::new();
        let _ = pixels.resize(count, BLACK);
        Self {
            frame: pixels.clone(),
            pixels,
            brightness: 255,
            flushes: 0,
            initialized: false,
        }
    }

    /// Buffered pixels, without brightness applied
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Pixels as of the last flush, brightness applied
    pub fn frame(&self) -> &[Rgb] {
        &self.frame
    }

    pub const fn flush_count(&self) -> usize {
        self.flushes
    }

    pub const fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl<const N: usize> PixelDriver for MemoryDriver<N> {
    type Error = Infallible;

    fn init(&mut self) {
        self.initialized = true;
    }

    fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_count(&self) -> u16 {
        self.pixels.len() as u16
    }

    fn pixel_color(&self, index: u16) -> Rgb {
        self.pixels.get(usize::from(index)).copied().unwrap_or(BLACK)
    }

    fn set_pixel_color(&mut self, index: u16, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(usize::from(index)) {
            *pixel = color;
        }
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        for (shown, &pixel) in self.frame.iter_mut().zip(self.pixels.iter()) {
            *shown = scale_color(pixel, self.brightness);
        }
        self.flushes += 1;
        Ok(())
    }
}

/// Driver buffering pixels for any [`SmartLedsWrite`] implementation
///
/// Brightness is applied on flush with `smart_leds::brightness`.
pub struct SmartLedsDriver<W, const N: usize> {
    writer: W,
    pixels: Vec<Rgb, N>,
    brightness: u8,
}

impl<W, const N: usize> SmartLedsDriver<W, N> {
    /// Wrap `writer` driving a strip of `count` pixels (at most N)
    pub fn new(writer: W, count: u16) -> Self {
        let mut pixels = Vec::new();
        let _ = pixels.resize(usize::from(count).min(N), BLACK);
        Self {
            writer,
            pixels,
            brightness: 255,
        }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }
}

impl<W, const N: usize> PixelDriver for SmartLedsDriver<W, N>
where
    W: SmartLedsWrite,
    W::Error: core::fmt::Debug,
    Rgb: Into<W::Color>,
{
    type Error = W::Error;

    fn clear(&mut self) {
        self.pixels.fill(BLACK);
    }

    #[allow(clippy::cast_possible_truncation)]
    fn pixel_count(&self) -> u16 {
        self.pixels.len() as u16
    }

    fn pixel_color(&self, index: u16) -> Rgb {
        self.pixels.get(usize::from(index)).copied().unwrap_or(BLACK)
    }

    fn set_pixel_color(&mut self, index: u16, color: Rgb) {
        if let Some(pixel) = self.pixels.get_mut(usize::from(index)) {
            *pixel = color;
        }
    }

    fn brightness(&self) -> u8 {
        self.brightness
    }

    fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.writer
            .write(brightness(self.pixels.iter().copied(), self.brightness))
    }
}
