//! Frame writer on top of [`SignalEncoder`].
//!
//! Each pixel goes out as four bytes in GRBW order inside one critical
//! section. Interrupts are masked for roughly 40 bit times per pixel
//! (~50 us), so remote edges falling in that window are delayed until the
//! section ends and their measured width is stretched. Between pixels
//! interrupts are serviced normally.

use embedded_hal::digital::OutputPin;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::Rgbw;
use crate::signal::{PreciseDelay, SignalEncoder};

/// Writes pixels and whole frames to an RGBW strip.
pub struct PixelWriter<P, D> {
    encoder: SignalEncoder<P, D>,
    brightness: u8,
}

impl<P: OutputPin, D: PreciseDelay> PixelWriter<P, D> {
    pub const fn new(encoder: SignalEncoder<P, D>) -> Self {
        Self {
            encoder,
            brightness: u8::MAX,
        }
    }

    /// Brightness used by the [`SmartLedsWrite`] path.
    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    /// Write one pixel in wire order (green, red, blue, white).
    pub fn write_pixel(&mut self, color: Rgbw, brightness: u8) -> Result<(), P::Error> {
        let encoder = &mut self.encoder;
        critical_section::with(|_| -> Result<(), P::Error> {
            for byte in color.wire_order() {
                encoder.write_byte(byte, brightness)?;
            }
            Ok(())
        })
    }

    /// Write every pixel in index order, then the reset gap.
    pub fn write_strip<I>(&mut self, pixels: I, brightness: u8) -> Result<(), P::Error>
    where
        I: IntoIterator<Item = Rgbw>,
    {
        for pixel in pixels {
            self.write_pixel(pixel, brightness)?;
        }
        self.encoder.write_reset()
    }

    pub fn release(self) -> SignalEncoder<P, D> {
        self.encoder
    }
}

impl<P: OutputPin, D: PreciseDelay> OutputDriver for PixelWriter<P, D> {
    type Error = P::Error;

    fn write(&mut self, colors: &[Rgbw], brightness: u8) -> Result<(), Self::Error> {
        self.write_strip(colors.iter().copied(), brightness)
    }
}

impl<P: OutputPin, D: PreciseDelay> SmartLedsWrite for PixelWriter<P, D> {
    type Error = P::Error;
    type Color = Rgbw;

    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        let brightness = self.brightness;
        self.write_strip(iterator.into_iter().map(Into::into), brightness)
    }
}
