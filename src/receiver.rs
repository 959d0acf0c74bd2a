//! Interrupt-side entry point.
//!
//! Owns the decoder and interpreter; call [`IrReceiver::on_edge`] from the
//! pin-change interrupt with the ticks read (and cleared) from the capture
//! timer.

use crate::command::Command;
use crate::interpreter::CommandInterpreter;
use crate::remote::{Edge, Level, RemoteDecoder, RemoteEvent, Ticks};
use crate::shared::SharedRenderState;

/// Remote receiver bound to the shared render state.
pub struct IrReceiver<'a> {
    decoder: RemoteDecoder,
    interpreter: CommandInterpreter,
    state: &'a SharedRenderState,
}

impl<'a> IrReceiver<'a> {
    pub const fn new(state: &'a SharedRenderState) -> Self {
        Self {
            decoder: RemoteDecoder::new(),
            interpreter: CommandInterpreter::new(),
            state,
        }
    }

    /// Process one pin transition.
    ///
    /// Returns the command applied to the render state, if any.
    pub fn on_edge(&mut self, elapsed: Ticks, level: Level) -> Option<Command> {
        let event = self.decoder.feed(Edge { elapsed, level })?;
        let interpreter = &mut self.interpreter;
        self.state.update(|state| match event {
            RemoteEvent::Received(code) => interpreter.on_receive(code, state),
            RemoteEvent::Repeat(code) => interpreter.on_repeat(code, state),
        })
    }

    pub const fn decoder(&self) -> &RemoteDecoder {
        &self.decoder
    }

    pub const fn interpreter(&self) -> &CommandInterpreter {
        &self.interpreter
    }
}
