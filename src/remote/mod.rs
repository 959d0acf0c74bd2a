//! Pulse-distance remote decoder.
//!
//! The decoder is fed one [`Edge`] per pin transition: the level the pin
//! settled at and the ticks elapsed since the previous transition (a
//! free-running counter read and cleared in the edge interrupt). The receiver
//! module output is active low, so a burst of carrier reads as a low level.
//!
//! Frame as seen on the pin:
//!
//! ```text
//! idle  | 9 ms low | 4.5 ms high | 32 x (560 us low, 560/1690 us high) | 560 us low | idle
//! repeat: 9 ms low | 2.25 ms high | 560 us low
//! ```
//!
//! Every edge advances a position counter by one. A rising edge after a long
//! low (the 9 ms header burst) rewinds the counter, so a corrupted frame is
//! forgotten at the next header. Bits are sampled on falling edges, MSB
//! first, into a 16-bit word: after 32 bits it holds the command byte
//! followed by its inverse.

mod codes;
mod frame;

pub use codes::{REMOTE_CODES, decode};
pub use frame::NecFrame;

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Timer ticks between two edges.
pub type Ticks = u16;

/// Length of one timer tick in microseconds.
pub const TICK_US: u32 = 32;

/// Convert microseconds to timer ticks, saturating at `Ticks::MAX`.
#[allow(clippy::cast_possible_truncation)]
pub const fn us_to_ticks(us: u32) -> Ticks {
    let ticks = us / TICK_US;
    if ticks > Ticks::MAX as u32 {
        Ticks::MAX
    } else {
        ticks as Ticks
    }
}

/// Low time after which a rising edge rewinds the decoder.
pub const LONG_GAP: Ticks = us_to_ticks(7_000);
/// High time at position 1 that starts a new code.
pub const HEADER_SPACE: Ticks = us_to_ticks(3_400);
/// High time at position 1 that marks a repeat.
pub const REPEAT_SPACE: Ticks = us_to_ticks(1_700);
/// High time above which a data bit reads as 1.
pub const ONE_SPACE: Ticks = us_to_ticks(1_120);

/// Data bits per frame.
pub const CODE_BITS: u8 = 32;
/// Position after which a frame is complete (header space plus two edges per bit).
pub const LAST_POSITION: u8 = 1 + 2 * CODE_BITS;

/// Pin level after an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    High,
}

/// One captured pin transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Ticks since the previous edge.
    pub elapsed: Ticks,
    /// Level the pin changed to.
    pub level: Level,
}

impl Edge {
    pub const fn rising(elapsed: Ticks) -> Self {
        Self {
            elapsed,
            level: Level::High,
        }
    }

    pub const fn falling(elapsed: Ticks) -> Self {
        Self {
            elapsed,
            level: Level::Low,
        }
    }
}

/// Where the decoder is within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderPhase {
    /// Not inside a frame.
    Idle,
    /// Header burst seen, waiting for the header space.
    HeaderSeen,
    /// Header accepted, shifting in bits.
    Receiving { code: u16 },
    /// Code latched; stays here until the next header.
    Complete { code: u16 },
}

/// Output of the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteEvent {
    /// A full code arrived (fresh button press).
    Received(u16),
    /// Repeat marker for the last received code (button held).
    Repeat(u16),
}

/// Edge-timing decoder state.
#[derive(Debug, Clone)]
pub struct RemoteDecoder {
    phase: DecoderPhase,
    position: u8,
    last_code: Option<u16>,
}

impl Default for RemoteDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteDecoder {
    pub const fn new() -> Self {
        Self {
            phase: DecoderPhase::Idle,
            position: 0,
            last_code: None,
        }
    }

    pub const fn phase(&self) -> DecoderPhase {
        self.phase
    }

    pub const fn position(&self) -> u8 {
        self.position
    }

    /// Last completed code, if any.
    pub const fn last_code(&self) -> Option<u16> {
        self.last_code
    }

    /// Advance the state machine by one edge.
    ///
    /// Returns an event when a frame completes or a repeat marker arrives.
    pub fn feed(&mut self, edge: Edge) -> Option<RemoteEvent> {
        let mut event = None;

        if edge.level == Level::High && edge.elapsed > LONG_GAP {
            self.position = 0;
            self.phase = DecoderPhase::HeaderSeen;
        } else if self.position == 1 {
            if edge.elapsed > HEADER_SPACE {
                self.phase = DecoderPhase::Receiving { code: 0 };
            } else {
                if edge.elapsed > REPEAT_SPACE {
                    event = self.last_code.map(RemoteEvent::Repeat);
                }
                self.phase = DecoderPhase::Idle;
            }
        } else if let DecoderPhase::Receiving { code } = self.phase {
            if edge.level == Level::Low {
                let bit = u16::from(edge.elapsed > ONE_SPACE);
                self.phase = DecoderPhase::Receiving {
                    code: (code << 1) | bit,
                };
            }
        }

        self.position = self.position.saturating_add(1);

        if let DecoderPhase::Receiving { code } = self.phase {
            if self.position > LAST_POSITION {
                #[cfg(feature = "esp32-log")]
                println!("[RemoteDecoder.feed] code {:04X}", code);
                self.phase = DecoderPhase::Complete { code };
                self.last_code = Some(code);
                event = Some(RemoteEvent::Received(code));
            }
        }

        event
    }
}
