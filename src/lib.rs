#![no_std]

pub mod color;
pub mod command;
pub mod effect;
pub mod frame_scheduler;
pub mod interpreter;
pub mod math8;
pub mod pixel_writer;
pub mod receiver;
pub mod remote;
pub mod renderer;
pub mod shared;
pub mod signal;
pub mod state;

pub use color::{ColorChannel, Rgbw};
pub use command::Command;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use interpreter::CommandInterpreter;
pub use pixel_writer::PixelWriter;
pub use receiver::IrReceiver;
pub use remote::{Edge, Level, RemoteDecoder, RemoteEvent, Ticks};
pub use renderer::Renderer;
pub use shared::SharedRenderState;
pub use signal::{BitTiming, PreciseDelay, SignalEncoder};
pub use state::{DEFAULT_LIGHT_CONFIG, LightConfig, Mode, RenderState};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait OutputDriver {
    type Error;

    /// Write colors to the LED strip, scaled by `brightness`
    fn write(&mut self, colors: &[Rgbw], brightness: u8) -> Result<(), Self::Error>;
}
