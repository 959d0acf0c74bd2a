use super::{Effect, STEP_SHIFT};
use crate::color::Rgbw;

/// Whole strip blinking between a color and black.
#[derive(Debug, Clone)]
pub struct FlashEffect {
    color: Rgbw,
}

impl FlashEffect {
    pub const fn new(color: Rgbw) -> Self {
        Self { color }
    }
}

impl Effect for FlashEffect {
    fn render(&self, phase: u32, leds: &mut [Rgbw]) {
        let lit = (phase >> STEP_SHIFT) & 1 == 0;
        leds.fill(if lit { self.color } else { Rgbw::BLACK });
    }
}
