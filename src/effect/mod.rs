//! Per-pixel patterns, one per [`Mode`], and the power wipe mask.
//!
//! All patterns are stored in an enum to avoid heap allocations. A pattern
//! is a pure function of pixel index, strip length, the mode's color, the
//! selection seed and the animation phase, so the renderer can draw the
//! outgoing and incoming mode side by side during a transition.

mod cycle;
mod flash;
mod rainbow;
mod scatter;
mod static_color;
mod wipe;

pub use cycle::{CycleEffect, CycleStyle};
pub use flash::FlashEffect;
pub use rainbow::RainbowEffect;
pub use scatter::{SCATTER_SPACING, ScatterEffect};
pub use static_color::StaticColorEffect;
pub use wipe::{WIPE_SEGMENT, apply_wipe};

use crate::color::{PALETTE_3, PALETTE_7, Rgbw};
use crate::state::Mode;

/// Phase bits below one animation step (one palette entry, one flash half).
pub const STEP_SHIFT: u32 = 10;

pub trait Effect {
    /// Render a single frame
    fn render(&self, phase: u32, leds: &mut [Rgbw]);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Uniform color
    Static(StaticColorEffect),
    /// Color alternating with black
    Flash(FlashEffect),
    /// Palette cycling with hard cuts or fades
    Cycle(CycleEffect),
    /// Rainbow spread along the strip
    Rainbow(RainbowEffect),
    /// Sparse random dots
    Scatter(ScatterEffect),
}

impl EffectSlot {
    /// Build the effect for a mode, its color and the selection seed.
    pub fn new(mode: Mode, color: Rgbw, seed: u32) -> Self {
        match mode {
            Mode::Solid => Self::Static(StaticColorEffect::new(color)),
            Mode::Flash => Self::Flash(FlashEffect::new(color)),
            Mode::Jump3 => Self::Cycle(CycleEffect::new(&PALETTE_3, CycleStyle::Jump)),
            Mode::Jump7 => Self::Cycle(CycleEffect::new(&PALETTE_7, CycleStyle::Jump)),
            Mode::Fade3 => Self::Cycle(CycleEffect::new(&PALETTE_3, CycleStyle::Fade)),
            Mode::Fade7 => Self::Cycle(CycleEffect::new(&PALETTE_7, CycleStyle::Fade)),
            Mode::Auto => Self::Rainbow(RainbowEffect::default()),
            Mode::Scatter => Self::Scatter(ScatterEffect::new(seed)),
        }
    }

    /// Render the current effect
    pub fn render(&self, phase: u32, leds: &mut [Rgbw]) {
        match self {
            Self::Static(effect) => effect.render(phase, leds),
            Self::Flash(effect) => effect.render(phase, leds),
            Self::Cycle(effect) => effect.render(phase, leds),
            Self::Rainbow(effect) => effect.render(phase, leds),
            Self::Scatter(effect) => effect.render(phase, leds),
        }
    }
}
