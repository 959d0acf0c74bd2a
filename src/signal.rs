//! Bit-banged signal encoder for self-clocked one-wire RGBW strips.
//!
//! Every bit is one high pulse followed by one low pulse. The ratio of the
//! two encodes the bit:
//!
//! ```text
//! Symbol  Min   Typical  Max   Units  Parameter
//! T0H     150   300      450   ns     0 code, high level time
//! T0L     750   900      1050  ns     0 code, low level time
//! T1H     450   600      750   ns     1 code, high level time
//! T1L     450   600      750   ns     1 code, low level time
//! RES     38    80       -     us     reset code, low level time
//! ```
//!
//! Widths this short cannot come from a timer. They are produced by burning
//! a fixed number of CPU cycles (see [`PreciseDelay`]), calibrated once for
//! the processor clock with [`BitTiming::for_clock`].

use embedded_hal::digital::OutputPin;

use crate::math8::scale8;

/// Allowed width of one pulse, in nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PulseWindow {
    pub min_ns: u32,
    pub typical_ns: u32,
    pub max_ns: u32,
}

impl PulseWindow {
    pub const fn contains(self, ns: u32) -> bool {
        ns >= self.min_ns && ns <= self.max_ns
    }
}

pub const T0H: PulseWindow = PulseWindow {
    min_ns: 150,
    typical_ns: 300,
    max_ns: 450,
};
pub const T0L: PulseWindow = PulseWindow {
    min_ns: 750,
    typical_ns: 900,
    max_ns: 1050,
};
pub const T1H: PulseWindow = PulseWindow {
    min_ns: 450,
    typical_ns: 600,
    max_ns: 750,
};
pub const T1L: PulseWindow = PulseWindow {
    min_ns: 450,
    typical_ns: 600,
    max_ns: 750,
};

/// Minimum low time that latches a frame.
pub const RESET_MIN_NS: u32 = 38_000;
/// Low time actually emitted after a frame.
pub const RESET_NS: u32 = 80_000;

/// Busy-wait capability with cycle resolution.
///
/// On hardware this is a counted run of no-op instructions (for example
/// `cortex_m::asm::delay`). Implementations must not yield or sleep.
pub trait PreciseDelay {
    /// Burn exactly `cycles` CPU cycles.
    fn delay_cycles(&mut self, cycles: u32);
}

/// Convert nanoseconds to CPU cycles at `clock_hz`, rounded to nearest.
#[allow(clippy::cast_possible_truncation)]
pub const fn cycles_for_ns(ns: u32, clock_hz: u32) -> u32 {
    ((ns as u64 * clock_hz as u64 + 500_000_000) / 1_000_000_000) as u32
}

/// Convert CPU cycles at `clock_hz` back to nanoseconds, rounded to nearest.
#[allow(clippy::cast_possible_truncation)]
pub const fn ns_for_cycles(cycles: u32, clock_hz: u32) -> u32 {
    if clock_hz == 0 {
        return 0;
    }
    ((cycles as u64 * 1_000_000_000 + clock_hz as u64 / 2) / clock_hz as u64) as u32
}

/// Cycle counts for the high and low half of each bit, plus the reset gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitTiming {
    pub zero_high: u32,
    pub zero_low: u32,
    pub one_high: u32,
    pub one_low: u32,
    pub reset: u32,
}

impl BitTiming {
    /// Calibrate typical pulse widths for a CPU running at `clock_hz`.
    pub const fn for_clock(clock_hz: u32) -> Self {
        Self {
            zero_high: cycles_for_ns(T0H.typical_ns, clock_hz),
            zero_low: cycles_for_ns(T0L.typical_ns, clock_hz),
            one_high: cycles_for_ns(T1H.typical_ns, clock_hz),
            one_low: cycles_for_ns(T1L.typical_ns, clock_hz),
            reset: cycles_for_ns(RESET_NS, clock_hz),
        }
    }

    /// Returns high and low cycle counts for one bit.
    #[inline]
    pub const fn pulse(&self, bit: bool) -> (u32, u32) {
        if bit {
            (self.one_high, self.one_low)
        } else {
            (self.zero_high, self.zero_low)
        }
    }

    /// Check every pulse width against its tolerance window at `clock_hz`.
    pub const fn within_tolerance(&self, clock_hz: u32) -> bool {
        T0H.contains(ns_for_cycles(self.zero_high, clock_hz))
            && T0L.contains(ns_for_cycles(self.zero_low, clock_hz))
            && T1H.contains(ns_for_cycles(self.one_high, clock_hz))
            && T1L.contains(ns_for_cycles(self.one_low, clock_hz))
            && ns_for_cycles(self.reset, clock_hz) >= RESET_MIN_NS
    }
}

/// Drives one output pin with the strip's pulse train.
///
/// Not reentrant: a transmission borrows the encoder mutably for its whole
/// duration.
pub struct SignalEncoder<P, D> {
    pin: P,
    delay: D,
    timing: BitTiming,
}

impl<P: OutputPin, D: PreciseDelay> SignalEncoder<P, D> {
    /// Create a new encoder. The pin is expected to idle low.
    pub const fn new(pin: P, delay: D, timing: BitTiming) -> Self {
        Self { pin, delay, timing }
    }

    pub const fn timing(&self) -> &BitTiming {
        &self.timing
    }

    /// Emit one byte, MSB first, after scaling it by `brightness`.
    #[inline]
    pub fn write_byte(&mut self, byte: u8, brightness: u8) -> Result<(), P::Error> {
        let mut data = scale8(byte, brightness);
        for _ in 0..8 {
            let (high, low) = self.timing.pulse(data & 0x80 != 0);
            self.pin.set_high()?;
            self.delay.delay_cycles(high);
            self.pin.set_low()?;
            self.delay.delay_cycles(low);
            data <<= 1;
        }
        Ok(())
    }

    /// Hold the line low long enough for the strip to latch the frame.
    pub fn write_reset(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()?;
        self.delay.delay_cycles(self.timing.reset);
        Ok(())
    }

    /// Release the pin and delay.
    pub fn release(self) -> (P, D) {
        (self.pin, self.delay)
    }
}
