mod palette;

pub use palette::{DIY_SLOTS, PALETTE_3, PALETTE_7, PRESET_COLORS, SCATTER_HUES};
pub use smart_leds::hsv::{Hsv, hsv2rgb};
use smart_leds::RGB8;

use crate::math8::blend8;

/// One of the four channels of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
    White,
}

/// RGBW pixel color
///
/// Field order is the in-memory order only. The strip always receives
/// green, red, blue, white (see [`Rgbw::wire_order`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgbw {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub w: u8,
}

impl Rgbw {
    pub const BLACK: Self = Self::new(0, 0, 0, 0);
    pub const RED: Self = Self::new(255, 0, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0, 0);
    pub const BLUE: Self = Self::new(0, 0, 255, 0);
    pub const WHITE: Self = Self::new(0, 0, 0, 255);
    pub const WARM_WHITE: Self = Self::new(255, 80, 0, 120);

    pub const fn new(r: u8, g: u8, b: u8, w: u8) -> Self {
        Self { r, g, b, w }
    }

    /// Channel bytes in transmission order (GRBW).
    pub const fn wire_order(self) -> [u8; 4] {
        [self.g, self.r, self.b, self.w]
    }

    pub const fn channel(self, channel: ColorChannel) -> u8 {
        match channel {
            ColorChannel::Red => self.r,
            ColorChannel::Green => self.g,
            ColorChannel::Blue => self.b,
            ColorChannel::White => self.w,
        }
    }

    #[must_use]
    pub const fn with_channel(mut self, channel: ColorChannel, value: u8) -> Self {
        match channel {
            ColorChannel::Red => self.r = value,
            ColorChannel::Green => self.g = value,
            ColorChannel::Blue => self.b = value,
            ColorChannel::White => self.w = value,
        }
        self
    }
}

impl From<RGB8> for Rgbw {
    fn from(color: RGB8) -> Self {
        Self::new(color.r, color.g, color.b, 0)
    }
}

/// Blend two RGBW colors
///
/// # Arguments
/// * `a` - First color
/// * `b` - Second color
/// * `amount_of_b` - Blend factor (0 = all a, 255 = all b)
#[inline]
pub fn blend_colors(a: Rgbw, b: Rgbw, amount_of_b: u8) -> Rgbw {
    Rgbw {
        r: blend8(a.r, b.r, amount_of_b),
        g: blend8(a.g, b.g, amount_of_b),
        b: blend8(a.b, b.b, amount_of_b),
        w: blend8(a.w, b.w, amount_of_b),
    }
}

/// Three-segment linear color wheel
///
/// Red fades into blue over 0..85, blue into green over 85..170 and green
/// back into red over 170..=255. One primary is always fully off, the white
/// channel too.
pub const fn hue_wheel(hue: u8) -> Rgbw {
    if hue < 85 {
        let rise = hue * 3;
        Rgbw::new(255 - rise, 0, rise, 0)
    } else if hue < 170 {
        let rise = (hue - 85) * 3;
        Rgbw::new(0, rise, 255 - rise, 0)
    } else {
        let rise = (hue - 170) * 3;
        Rgbw::new(rise, 255 - rise, 0, 0)
    }
}

/// Create an RGBW color from a u32 value (0xRRGGBBWW format)
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    Rgbw {
        r: ((color >> 24) & 0xFF) as u8,
        g: ((color >> 16) & 0xFF) as u8,
        b: ((color >> 8) & 0xFF) as u8,
        w: (color & 0xFF) as u8,
    }
}
