//! Engine configuration and the power-on patch.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{dsp::oscillator::Waveform, synth::modulation::ModulationTarget};

/// Parameter values the engine starts with, before any controller moves.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    pub waveform: Waveform,
    pub lfo_waveform: Waveform,
    pub osc_frequency: f32,
    pub lfo_frequency: f32,
    pub mod_amount: f32,
    pub mod_target: ModulationTarget,
    pub filter_cutoff: f32,
    pub filter_resonance: f32,
    pub dist_gain: f32,
    pub dist_volume: f32,
    /// Start with the gate closed; the first note opens it.
    pub muted: bool,
}

impl Default for Patch {
    fn default() -> Self {
        Self {
            waveform: Waveform::Saw,
            lfo_waveform: Waveform::Saw,
            osc_frequency: 440.0,
            lfo_frequency: 0.1,
            mod_amount: 0.5,
            mod_target: ModulationTarget::Pitch,
            filter_cutoff: 3_000.0,
            filter_resonance: 1.0,
            dist_gain: 1.0,
            dist_volume: 1.0,
            muted: true,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub sample_rate: f32,
    /// Frames per device callback. The engine itself accepts any length.
    pub buffer_frames: usize,
    /// Gain applied after distortion, before the gate.
    pub headroom: f32,
    pub initial: Patch,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sample_rate: crate::SAMPLE_RATE,
            buffer_frames: crate::BUFFER_FRAMES,
            headroom: crate::HEADROOM,
            initial: Patch::default(),
        }
    }
}

impl EngineConfig {
    pub fn with_sample_rate(mut self, sample_rate: f32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_buffer_frames(mut self, buffer_frames: usize) -> Self {
        self.buffer_frames = buffer_frames;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate.is_finite() && self.sample_rate > 0.0) {
            return Err(ConfigError::SampleRate(self.sample_rate));
        }
        if self.buffer_frames == 0 || self.buffer_frames > crate::MAX_BUFFER_FRAMES {
            return Err(ConfigError::BufferFrames(self.buffer_frames));
        }
        if !(self.headroom.is_finite() && (0.0..=1.0).contains(&self.headroom)) {
            return Err(ConfigError::Headroom(self.headroom));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    SampleRate(f32),
    BufferFrames(usize),
    Headroom(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SampleRate(rate) => write!(f, "sample rate must be positive, got {rate}"),
            ConfigError::BufferFrames(frames) => write!(
                f,
                "buffer size must be between 1 and {} frames, got {frames}",
                crate::MAX_BUFFER_FRAMES
            ),
            ConfigError::Headroom(gain) => write!(f, "headroom must be within 0..=1, got {gain}"),
        }
    }
}

impl std::error::Error for ConfigError {}
