//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::shared::SharedRenderState;
use crate::{OutputDriver, Renderer};

/// Default target frame rate (50 FPS).
pub const DEFAULT_FPS: u32 = 50;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Countdown consumed per frame; a full transition lasts 51 frames.
pub const TRANSITION_STEP: u8 = 5;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Takes a consistent snapshot of the shared render state
/// - Renders the frame and hands it to the output driver
/// - Tracks frame timing with drift correction
///
/// # Usage
///
/// ```ignore
/// static STATE: SharedRenderState = SharedRenderState::new(&DEFAULT_LIGHT_CONFIG);
///
/// let mut scheduler = FrameScheduler::<_, 90>::new(&STATE, writer);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now))?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const N: usize> {
    output: O,
    renderer: Renderer<N>,
    state: &'a SharedRenderState,
    next_frame: Instant,
    frame_duration: Duration,
    transition_step: u8,
}

impl<'a, O: OutputDriver, const N: usize> FrameScheduler<'a, O, N> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (50 FPS) for frame timing.
    pub fn new(state: &'a SharedRenderState, driver: O) -> Self {
        Self::with_frame_duration(state, driver, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        state: &'a SharedRenderState,
        driver: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output: driver,
            renderer: Renderer::new(),
            state,
            next_frame: Instant::from_millis(0),
            frame_duration,
            transition_step: TRANSITION_STEP,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, O::Error> {
        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FrameScheduler.tick] behind by {} ms, resetting schedule",
                now.as_millis() - self.next_frame.as_millis()
            );
            self.next_frame = now;
        }

        let state = self.state.take_frame(self.transition_step);
        let frame = self.renderer.render(&state);
        self.output.write(frame, state.brightness)?;

        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<N> {
        &self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
