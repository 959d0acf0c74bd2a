//! Scatter effect
//!
//! Lights every third pixel with a color drawn from [`SCATTER_HUES`] and
//! leaves the pixels in between dark. Neighbouring dots never share a hue.
//! Draws are a hash of the seed and the dot number, so the pattern holds
//! still between frames and only changes with the seed.

use super::Effect;
use crate::color::{Rgbw, SCATTER_HUES, hue_wheel};

/// Distance between two lit pixels.
pub const SCATTER_SPACING: usize = 3;

/// Draws before settling for the first hue that differs.
const MAX_DRAWS: u64 = 8;

#[derive(Debug, Clone)]
pub struct ScatterEffect {
    seed: u32,
}

impl ScatterEffect {
    pub const fn new(seed: u32) -> Self {
        Self { seed }
    }

    /// SplitMix64-style mixing folded down to 32 bits
    #[inline]
    const fn hash(x: u64) -> u32 {
        let mut z = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        #[allow(clippy::cast_possible_truncation)]
        {
            (z ^ (z >> 31)) as u32
        }
    }

    /// Hue for dot number `dot`, never equal to `previous`.
    pub fn hue_at(&self, dot: usize, previous: u8) -> u8 {
        let base = (u64::from(self.seed) << 32) | dot as u64;
        for draw in 0..MAX_DRAWS {
            let roll = Self::hash(base.wrapping_add(draw << 40)) as usize;
            let hue = SCATTER_HUES[roll % SCATTER_HUES.len()];
            if hue != previous {
                return hue;
            }
        }
        SCATTER_HUES
            .iter()
            .copied()
            .find(|&hue| hue != previous)
            .unwrap_or(previous)
    }
}

impl Effect for ScatterEffect {
    fn render(&self, _phase: u32, leds: &mut [Rgbw]) {
        // the first dot is never hue 0
        let mut previous = 0;
        for (index, led) in leds.iter_mut().enumerate() {
            if index % SCATTER_SPACING == 0 {
                previous = self.hue_at(index / SCATTER_SPACING, previous);
                *led = hue_wheel(previous);
            } else {
                *led = Rgbw::BLACK;
            }
        }
    }
}
