//! Fixed colors behind the remote's color keys and animated modes.

use super::{Rgbw, rgbw_from_u32};

/// Preset colors, in remote key order (row by row, left to right).
pub const PRESET_COLORS: [Rgbw; 20] = [
    Rgbw::RED,
    Rgbw::GREEN,
    Rgbw::BLUE,
    Rgbw::WHITE,
    rgbw_from_u32(0xFF_40_00_00),
    rgbw_from_u32(0x40_FF_20_00),
    rgbw_from_u32(0x20_60_FF_00),
    rgbw_from_u32(0xFF_40_60_40),
    rgbw_from_u32(0xFF_70_00_00),
    rgbw_from_u32(0x00_FF_80_00),
    rgbw_from_u32(0x60_00_FF_00),
    rgbw_from_u32(0xFF_50_00_80),
    rgbw_from_u32(0xFF_A0_00_00),
    rgbw_from_u32(0x00_C0_C0_00),
    rgbw_from_u32(0xA0_00_C0_00),
    rgbw_from_u32(0x00_00_40_FF),
    rgbw_from_u32(0xFF_FF_00_00),
    rgbw_from_u32(0x00_A0_FF_00),
    rgbw_from_u32(0xFF_00_FF_00),
    rgbw_from_u32(0x40_40_FF_C0),
];

/// Number of user color slots (DIY keys).
pub const DIY_SLOTS: usize = 6;

pub const PALETTE_3: [Rgbw; 3] = [Rgbw::RED, Rgbw::GREEN, Rgbw::BLUE];

pub const PALETTE_7: [Rgbw; 7] = [
    Rgbw::RED,
    Rgbw::GREEN,
    Rgbw::BLUE,
    rgbw_from_u32(0xFF_FF_00_00),
    rgbw_from_u32(0x00_FF_FF_00),
    rgbw_from_u32(0xFF_00_FF_00),
    Rgbw::WHITE,
];

/// Hue wheel positions the scatter pattern draws from. Repeats weight the draw.
pub const SCATTER_HUES: [u8; 7] = [0, 0, 100, 185, 185, 220, 242];
