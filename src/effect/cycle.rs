//! Palette cycling effects
//!
//! The whole strip steps through a fixed palette, either cutting straight
//! to the next entry (`Jump`) or fading linearly into it (`Fade`).

use super::{Effect, STEP_SHIFT};
use crate::color::{Rgbw, blend_colors};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleStyle {
    Jump,
    Fade,
}

#[derive(Debug, Clone)]
pub struct CycleEffect {
    palette: &'static [Rgbw],
    style: CycleStyle,
}

impl CycleEffect {
    pub const fn new(palette: &'static [Rgbw], style: CycleStyle) -> Self {
        Self { palette, style }
    }

    /// Color for the given phase.
    #[allow(clippy::cast_possible_truncation)]
    pub fn color_at(&self, phase: u32) -> Rgbw {
        let len = self.palette.len();
        if len == 0 {
            return Rgbw::BLACK;
        }
        let step = (phase >> STEP_SHIFT) as usize % len;
        let current = self.palette[step];
        match self.style {
            CycleStyle::Jump => current,
            CycleStyle::Fade => {
                let next = self.palette[(step + 1) % len];
                let amount = (phase >> (STEP_SHIFT - 8)) as u8;
                blend_colors(current, next, amount)
            }
        }
    }
}

impl Effect for CycleEffect {
    fn render(&self, phase: u32, leds: &mut [Rgbw]) {
        leds.fill(self.color_at(phase));
    }
}
