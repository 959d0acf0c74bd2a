//! Rainbow effect
//!
//! Spreads one full hue circle over the strip and rotates it with the
//! animation phase. The white channel stays off.

use super::Effect;
use crate::color::{Hsv, Rgbw, hsv2rgb};

/// Phase bits dropped to get the base hue.
const HUE_SHIFT: u32 = 4;

#[derive(Debug, Clone)]
pub struct RainbowEffect {
    /// Saturation (0-255)
    saturation: u8,
    /// Brightness value (0-255)
    value: u8,
}

impl Default for RainbowEffect {
    fn default() -> Self {
        Self {
            saturation: 255,
            value: 255,
        }
    }
}

impl Effect for RainbowEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, phase: u32, leds: &mut [Rgbw]) {
        let count = leds.len().max(1);
        let base_hue = (phase >> HUE_SHIFT) as u8;
        for (index, led) in leds.iter_mut().enumerate() {
            let offset = (index * 256 / count) as u8;
            *led = hsv2rgb(Hsv {
                hue: base_hue.wrapping_add(offset),
                sat: self.saturation,
                val: self.value,
            })
            .into();
        }
    }
}
