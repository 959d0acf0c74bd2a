//! Command interpreter
//!
//! Turns decoded remote codes into render state changes. A fresh press runs
//! its command once. While the button is held the remote sends repeat
//! markers; only continuous adjustments (brightness, speed, color channels)
//! act on those, with a step that grows by one per repeat so holding a key
//! accelerates the change.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::{Command, UNRECOGNIZED};
use crate::remote::decode;
use crate::state::RenderState;

/// Maps codes to commands and tracks the hold-to-repeat counter.
#[derive(Debug, Clone, Default)]
pub struct CommandInterpreter {
    repeat_count: u8,
}

impl CommandInterpreter {
    pub const fn new() -> Self {
        Self { repeat_count: 0 }
    }

    /// Number of repeat markers since the last fresh press (saturating).
    pub const fn repeat_count(&self) -> u8 {
        self.repeat_count
    }

    /// Handle a freshly received code.
    ///
    /// Returns the executed command, or `None` for an unknown code.
    pub fn on_receive(&mut self, code: u16, state: &mut RenderState) -> Option<Command> {
        self.repeat_count = 0;
        let index = decode(code);
        self.execute(index, state)
    }

    /// Handle a repeat marker for `code` (the last received code).
    ///
    /// Toggle-type commands are not re-run; `None` is returned for them.
    pub fn on_repeat(&mut self, code: u16, state: &mut RenderState) -> Option<Command> {
        self.repeat_count = self.repeat_count.saturating_add(1);
        let index = decode(code);
        if !Command::is_repeatable(index) {
            return None;
        }
        self.execute(index, state)
    }

    /// Step size for continuous adjustments.
    const fn step(&self) -> u8 {
        if self.repeat_count == 0 {
            1
        } else {
            self.repeat_count
        }
    }

    fn execute(&self, index: u8, state: &mut RenderState) -> Option<Command> {
        if index == UNRECOGNIZED {
            return None;
        }
        let command = Command::from_index(index)?;
        let step = self.step();

        #[cfg(feature = "esp32-log")]
        println!(
            "[CommandInterpreter.execute] {:?} (index {}, step {})",
            command, index, step
        );

        match command {
            Command::Brightness { up } => state.adjust_brightness(step, up),
            Command::Speed { up } => state.adjust_speed(step, up),
            Command::Channel { channel, up } => state.adjust_channel(channel, step, up),
            Command::PlayPause => state.toggle_paused(),
            Command::Power => state.toggle_running(),
            Command::Color(color) => state.select_color(color),
            Command::Diy(slot) => state.select_diy(slot),
            Command::Mode(mode) => state.select_mode(mode),
        }

        Some(command)
    }
}
