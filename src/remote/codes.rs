//! Code table of the 44-key RGBW remote.
//!
//! Each entry is the 16-bit word the decoder latches (command byte followed
//! by its inverse). A code's command index is its position in the table plus
//! one; index 0 is reserved for "unrecognized".
//!
//! ```text
//!   [ BR+ ][ BR- ][ >|| ][ PWR ]      1   2  11  12
//!   [  R  ][  G  ][  B  ][  W  ]     13  14  15  16
//!   [     ][     ][     ][     ]     17  18  19  20
//!   [     ][     ][     ][     ]     21  22  23  24
//!   [     ][     ][     ][     ]     25  26  27  28
//!   [     ][     ][     ][     ]     29  30  31  32
//!   [ R+  ][ G+  ][ B+  ][QUICK]      5   7   9   3
//!   [ R-  ][ G-  ][ B-  ][SLOW ]      6   8  10   4
//!   [DIY1 ][DIY2 ][DIY3 ][AUTO ]     33  34  35  39
//!   [DIY4 ][DIY5 ][DIY6 ][FLASH]     36  37  38  40
//!   [JUMP3][JUMP7][FADE3][FADE7]     41  42  43  44
//! ```

pub static REMOTE_CODES: [u16; 44] = [
    // continuous adjustments
    0x3AC5, // brightness up
    0xBA45, // brightness down
    0xE817, // quick
    0xC837, // slow
    0x28D7, // red up
    0x08F7, // red down
    0xA857, // green up
    0x8877, // green down
    0x6897, // blue up
    0x48B7, // blue down
    // toggles
    0x827D, // play/pause
    0x02FD, // power
    // preset colors
    0x1AE5, 0x9A65, 0xA25D, 0x22DD, //
    0x2AD5, 0xAA55, 0x926D, 0x12ED, //
    0x0AF5, 0x8A75, 0xB24D, 0x32CD, //
    0x38C7, 0xB847, 0x7887, 0xF807, //
    0x18E7, 0x9867, 0x58A7, 0xD827, //
    // diy slots
    0x30CF, 0xB04F, 0x708F, 0x10EF, 0x906F, 0x50AF, //
    // animated modes
    0xF00F, // auto
    0xD02F, // flash
    0x20DF, // jump3
    0xA05F, // jump7
    0x609F, // fade3
    0xE01F, // fade7
];

/// Look up the command index for a decoded word; 0 if unknown.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(word: u16) -> u8 {
    REMOTE_CODES
        .iter()
        .position(|&code| code == word)
        .map_or(0, |index| index as u8 + 1)
}
