//! Interrupt-safe cell for [`RenderState`].
//!
//! Built on `critical-section`: the remote side writes from the edge
//! interrupt, the render loop reads once per frame, and both go through a
//! critical section so neither can observe a half-written color or mode.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::state::{LightConfig, RenderState};

/// Render state shared across the interrupt boundary.
pub struct SharedRenderState {
    inner: Mutex<RefCell<RenderState>>,
}

impl SharedRenderState {
    /// Create the shared state. Usable in a `static`.
    pub const fn new(config: &LightConfig) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(RenderState::new(config))),
        }
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> RenderState {
        critical_section::with(|cs| *self.inner.borrow(cs).borrow())
    }

    /// Mutate the state in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut RenderState) -> R) -> R {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            f(&mut state)
        })
    }

    /// Copy out the state for one frame and advance its transition.
    ///
    /// The returned copy still holds the countdown the frame should use.
    pub fn take_frame(&self, transition_step: u8) -> RenderState {
        critical_section::with(|cs| {
            let mut state = self.inner.borrow(cs).borrow_mut();
            let frame = *state;
            state.advance_transition(transition_step);
            frame
        })
    }
}

impl Default for SharedRenderState {
    fn default() -> Self {
        Self::new(&LightConfig::default())
    }
}
