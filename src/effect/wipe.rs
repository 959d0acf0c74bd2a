//! Power wipe
//!
//! Switching on or off sweeps a boundary through the strip. The strip is cut
//! into segments of [`WIPE_SEGMENT`] pixels that all sweep at once. Pixels
//! behind the boundary take the new look: lit when powering on, dark when
//! powering off.

use crate::color::Rgbw;

/// Pixels per wipe segment.
pub const WIPE_SEGMENT: usize = 15;

/// Mask a rendered frame for a wipe with `countdown` left.
///
/// At 255 nothing is swept yet; the boundary reaches the segment end as the
/// countdown runs out.
pub fn apply_wipe(leds: &mut [Rgbw], powering_on: bool, countdown: u8) {
    let progress = usize::from(u8::MAX - countdown);
    let boundary = progress * WIPE_SEGMENT / usize::from(u8::MAX);
    for (index, led) in leds.iter_mut().enumerate() {
        let swept = index % WIPE_SEGMENT < boundary;
        if swept != powering_on {
            *led = Rgbw::BLACK;
        }
    }
}
