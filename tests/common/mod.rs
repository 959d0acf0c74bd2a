//! Shared test doubles: a pin and a delay writing to one timeline, and an
//! output driver that keeps every frame.

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use core::convert::Infallible;
use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorType, OutputPin};
use rgbw_remote_strip::{BitTiming, OutputDriver, PixelWriter, PreciseDelay, Rgbw, SignalEncoder};

/// Clock used by the hardware doubles (16 MHz).
pub const CLOCK_HZ: u32 = 16_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    High,
    Low,
    Delay(u32),
}

/// Recorded activity on the data line.
#[derive(Debug, Clone, Default)]
pub struct Line(Rc<RefCell<Vec<LineEvent>>>);

impl Line {
    pub fn events(&self) -> Vec<LineEvent> {
        self.0.borrow().clone()
    }

    fn push(&self, event: LineEvent) {
        self.0.borrow_mut().push(event);
    }

    /// Split the recording into (high cycles, low cycles) pulses.
    ///
    /// Trailing events that do not form a full pulse are returned separately.
    pub fn pulses(&self) -> (Vec<(u32, u32)>, Vec<LineEvent>) {
        let events = self.events();
        let mut pulses = Vec::new();
        let mut rest = events.as_slice();
        while let [
            LineEvent::High,
            LineEvent::Delay(high),
            LineEvent::Low,
            LineEvent::Delay(low),
            tail @ ..,
        ] = rest
        {
            pulses.push((*high, *low));
            rest = tail;
        }
        (pulses, rest.to_vec())
    }
}

pub struct RecordingPin(pub Line);

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.push(LineEvent::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.push(LineEvent::High);
        Ok(())
    }
}

pub struct RecordingDelay(pub Line);

impl PreciseDelay for RecordingDelay {
    fn delay_cycles(&mut self, cycles: u32) {
        self.0.push(LineEvent::Delay(cycles));
    }
}

pub fn recording_encoder() -> (SignalEncoder<RecordingPin, RecordingDelay>, Line) {
    let line = Line::default();
    let encoder = SignalEncoder::new(
        RecordingPin(line.clone()),
        RecordingDelay(line.clone()),
        BitTiming::for_clock(CLOCK_HZ),
    );
    (encoder, line)
}

pub fn recording_writer() -> (PixelWriter<RecordingPin, RecordingDelay>, Line) {
    let (encoder, line) = recording_encoder();
    (PixelWriter::new(encoder), line)
}

/// Turn recorded pulses back into bytes, MSB first.
pub fn pulses_to_bytes(pulses: &[(u32, u32)], timing: &BitTiming) -> Vec<u8> {
    pulses
        .chunks(8)
        .map(|chunk| {
            chunk.iter().fold(0u8, |byte, &(high, low)| {
                let bit = if (high, low) == timing.pulse(true) {
                    1
                } else {
                    assert_eq!((high, low), timing.pulse(false));
                    0
                };
                (byte << 1) | bit
            })
        })
        .collect()
}

/// Output driver that records every frame it is given.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    pub frames: Vec<(Vec<Rgbw>, u8)>,
}

impl RecordingDriver {
    pub fn last(&self) -> &(Vec<Rgbw>, u8) {
        self.frames.last().expect("no frame written")
    }
}

impl OutputDriver for RecordingDriver {
    type Error = Infallible;

    fn write(&mut self, colors: &[Rgbw], brightness: u8) -> Result<(), Self::Error> {
        self.frames.push((colors.to_vec(), brightness));
        Ok(())
    }
}
