//! Remote command indices and the actions behind them.
//!
//! Index layout follows the code table in [`crate::remote::REMOTE_CODES`].

use core::ops::RangeInclusive;

use crate::color::{ColorChannel, DIY_SLOTS, PRESET_COLORS, Rgbw};
use crate::state::Mode;

/// Index returned for a code missing from the table.
pub const UNRECOGNIZED: u8 = 0;

/// Indices that keep acting while their button is held.
pub const REPEATABLE: RangeInclusive<u8> = 1..=10;

const PLAY_PAUSE: u8 = 11;
const POWER: u8 = 12;
const FIRST_PRESET: u8 = 13;
const FIRST_DIY: u8 = FIRST_PRESET + PRESET_COLORS.len() as u8;
const FIRST_MODE: u8 = FIRST_DIY + DIY_SLOTS as u8;

const MODE_KEYS: [Mode; 6] = [
    Mode::Auto,
    Mode::Flash,
    Mode::Jump3,
    Mode::Jump7,
    Mode::Fade3,
    Mode::Fade7,
];

/// Number of recognized command indices.
pub const COMMAND_COUNT: u8 = FIRST_MODE + MODE_KEYS.len() as u8 - 1;

/// Action bound to a remote key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Raise or lower global brightness
    Brightness { up: bool },
    /// Raise or lower animation speed
    Speed { up: bool },
    /// Nudge one channel of the current color
    Channel { channel: ColorChannel, up: bool },
    /// Freeze or resume the animation
    PlayPause,
    /// Switch the strip on or off
    Power,
    /// Show a preset color
    Color(Rgbw),
    /// Show a user color slot
    Diy(u8),
    /// Switch to an animated mode
    Mode(Mode),
}

impl Command {
    /// Map a command index (1..=44) to its action.
    pub fn from_index(index: u8) -> Option<Self> {
        Some(match index {
            1 => Self::Brightness { up: true },
            2 => Self::Brightness { up: false },
            3 => Self::Speed { up: true },
            4 => Self::Speed { up: false },
            5..=10 => {
                let offset = index - 5;
                let channel = match offset / 2 {
                    0 => ColorChannel::Red,
                    1 => ColorChannel::Green,
                    _ => ColorChannel::Blue,
                };
                Self::Channel {
                    channel,
                    up: offset % 2 == 0,
                }
            }
            PLAY_PAUSE => Self::PlayPause,
            POWER => Self::Power,
            FIRST_PRESET..FIRST_DIY => {
                Self::Color(*PRESET_COLORS.get(usize::from(index - FIRST_PRESET))?)
            }
            FIRST_DIY..FIRST_MODE => Self::Diy(index - FIRST_DIY),
            _ => Self::Mode(*MODE_KEYS.get(usize::from(index.checked_sub(FIRST_MODE)?))?),
        })
    }

    /// Whether a held button keeps applying this command.
    pub fn is_repeatable(index: u8) -> bool {
        REPEATABLE.contains(&index)
    }
}
