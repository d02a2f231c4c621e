mod gradient;

pub use gradient::{RAINBOW_GRADIENT, RAINBOW_GRADIENT_LEN, rainbow_sample};
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Fully dark pixel
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Compose a color from three 8-bit channels
pub const fn color(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Pack an RGB color into a u32 value (0xRRGGBB format)
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}
