//! Static color fill effect
//!
//! Fills all LEDs with a single solid color.

use super::Effect;
use crate::color::Rgbw;

/// Static color effect - fills all LEDs with one color
#[derive(Debug, Clone)]
pub struct StaticColorEffect {
    color: Rgbw,
}

impl StaticColorEffect {
    /// Create a new static color effect
    pub const fn new(color: Rgbw) -> Self {
        Self { color }
    }
}

impl Effect for StaticColorEffect {
    fn render(&self, _phase: u32, leds: &mut [Rgbw]) {
        leds.fill(self.color);
    }
}
