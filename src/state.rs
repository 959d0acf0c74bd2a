//! Render state shared between the remote (interrupt) side and the render loop.

use crate::color::{ColorChannel, DIY_SLOTS, Rgbw};
use crate::math8::step8;

/// Full transition distance; a mode change restarts the countdown here.
pub const TRANSITION_START: u8 = u8::MAX;

/// Rendering mode selected from the remote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Uniform color
    Solid,
    /// Color alternating with black
    Flash,
    /// Hard cuts through three colors
    Jump3,
    /// Hard cuts through seven colors
    Jump7,
    /// Fades between three colors
    Fade3,
    /// Fades between seven colors
    Fade7,
    /// Rainbow spread over the strip
    Auto,
    /// Sparse dots drawn at random from a few hue wheel positions
    Scatter,
}

/// Initial light settings
#[derive(Debug, Clone, Copy)]
pub struct LightConfig {
    pub brightness: u8,
    pub speed: u8,
    pub color: Rgbw,
    pub mode: Mode,
}

pub const DEFAULT_LIGHT_CONFIG: LightConfig = LightConfig {
    brightness: 128,
    speed: 64,
    color: Rgbw::WARM_WHITE,
    mode: Mode::Solid,
};

impl Default for LightConfig {
    fn default() -> Self {
        DEFAULT_LIGHT_CONFIG
    }
}

/// Everything the render loop needs to draw a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderState {
    pub running: bool,
    pub paused: bool,
    pub brightness: u8,
    pub speed: u8,
    pub mode: Mode,
    pub color: Rgbw,
    pub previous_mode: Mode,
    pub previous_color: Rgbw,
    /// Remaining transition distance (255 = just switched, 0 = settled)
    pub countdown: u8,
    /// The countdown drives a power wipe instead of a mode blend.
    pub power_wipe: bool,
    /// Bumped on every selection, so random patterns reroll.
    pub seed: u32,
    pub diy: [Rgbw; DIY_SLOTS],
    pub diy_slot: Option<u8>,
}

impl RenderState {
    pub const fn new(config: &LightConfig) -> Self {
        Self {
            running: true,
            paused: false,
            brightness: config.brightness,
            speed: config.speed,
            mode: config.mode,
            color: config.color,
            previous_mode: config.mode,
            previous_color: config.color,
            countdown: 0,
            power_wipe: false,
            seed: 0,
            diy: [Rgbw::WHITE; DIY_SLOTS],
            diy_slot: None,
        }
    }

    pub const fn is_transitioning(&self) -> bool {
        self.countdown > 0
    }

    /// Whether a power on/off wipe is still running.
    pub const fn is_wiping(&self) -> bool {
        self.power_wipe && self.is_transitioning()
    }

    /// Switch mode and color, keeping the outgoing pair for the blend.
    pub fn select(&mut self, mode: Mode, color: Rgbw) {
        self.previous_mode = self.mode;
        self.previous_color = self.color;
        self.mode = mode;
        self.color = color;
        self.countdown = TRANSITION_START;
        self.power_wipe = false;
        self.seed = self.seed.wrapping_add(1);
    }

    /// Switch to a preset color.
    pub fn select_color(&mut self, color: Rgbw) {
        self.diy_slot = None;
        self.select(Mode::Solid, color);
    }

    /// Switch to an animated mode, keeping the current color.
    pub fn select_mode(&mut self, mode: Mode) {
        self.diy_slot = None;
        self.select(mode, self.color);
    }

    /// Switch to a user color slot. Out of range slots are ignored.
    pub fn select_diy(&mut self, slot: u8) {
        let Some(&color) = self.diy.get(usize::from(slot)) else {
            return;
        };
        self.diy_slot = Some(slot);
        self.select(Mode::Solid, color);
    }

    pub fn adjust_brightness(&mut self, step: u8, up: bool) {
        self.brightness = step8(self.brightness, step, up);
    }

    pub fn adjust_speed(&mut self, step: u8, up: bool) {
        self.speed = step8(self.speed, step, up);
    }

    /// Nudge one channel of the current color; writes through to the active slot.
    pub fn adjust_channel(&mut self, channel: ColorChannel, step: u8, up: bool) {
        let value = step8(self.color.channel(channel), step, up);
        self.color = self.color.with_channel(channel, value);
        if let Some(slot) = self.diy_slot.and_then(|slot| self.diy.get_mut(usize::from(slot))) {
            *slot = self.color;
        }
    }

    /// Switch on or off, starting a wipe.
    ///
    /// Toggling again mid-wipe reverses it from where it stands.
    pub fn toggle_running(&mut self) {
        self.countdown = if self.is_wiping() {
            TRANSITION_START - self.countdown
        } else {
            TRANSITION_START
        };
        self.running = !self.running;
        self.power_wipe = true;
    }

    pub fn toggle_paused(&mut self) {
        self.paused = !self.paused;
    }

    /// Move the transition one frame closer to settled.
    pub fn advance_transition(&mut self, step: u8) {
        self.countdown = self.countdown.saturating_sub(step);
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new(&DEFAULT_LIGHT_CONFIG)
    }
}
