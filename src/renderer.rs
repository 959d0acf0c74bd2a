use crate::color::{Rgbw, blend_colors};
use crate::effect::{EffectSlot, apply_wipe};
use crate::state::RenderState;

/// Strip renderer
///
/// Draws the current mode into a frame buffer of `N` pixels. While a
/// transition is running the outgoing mode is drawn too and mixed in,
/// weighted by the countdown: at 255 the old look is shown in full, at 0
/// only the new one. A power toggle runs the same countdown as a wipe
/// instead of a blend.
pub struct Renderer<const N: usize> {
    frame_buffer: [Rgbw; N],
    previous_buffer: [Rgbw; N],
    phase: u32,
}

impl<const N: usize> Default for Renderer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Renderer<N> {
    pub const fn new() -> Self {
        Self {
            frame_buffer: [Rgbw::BLACK; N],
            previous_buffer: [Rgbw::BLACK; N],
            phase: 0,
        }
    }

    /// Current animation phase.
    pub const fn phase(&self) -> u32 {
        self.phase
    }

    /// Process one frame
    ///
    /// Renders `state` and advances the animation phase by the state's speed
    /// (unless powered off or paused).
    pub fn render(&mut self, state: &RenderState) -> &[Rgbw] {
        let wiping = state.is_wiping();
        if !state.running && !wiping {
            self.frame_buffer.fill(Rgbw::BLACK);
            return &self.frame_buffer;
        }

        EffectSlot::new(state.mode, state.color, state.seed)
            .render(self.phase, &mut self.frame_buffer);

        if wiping {
            apply_wipe(&mut self.frame_buffer, state.running, state.countdown);
        } else if state.is_transitioning() {
            // each selection bumps the seed, so the outgoing mode used the one before
            EffectSlot::new(
                state.previous_mode,
                state.previous_color,
                state.seed.wrapping_sub(1),
            )
            .render(self.phase, &mut self.previous_buffer);
            for (pixel, previous) in self.frame_buffer.iter_mut().zip(self.previous_buffer.iter()) {
                *pixel = blend_colors(*pixel, *previous, state.countdown);
            }
        }

        if state.running && !state.paused {
            self.phase = self.phase.wrapping_add(u32::from(state.speed));
        }

        &self.frame_buffer
    }
}
