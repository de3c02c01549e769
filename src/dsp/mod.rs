//! Low-level DSP primitives used by the synth engine.
//!
//! These components are allocation-free and realtime-safe, making them safe to
//! call once per sample from inside the audio callback. They stay focused on
//! the signal-processing math; parameter plumbing lives in `synth`.

/// Soft-clip waveshaper.
pub mod distortion;
/// Chamberlin state-variable low-pass filter.
pub mod filter;
/// LFO conventions and bipolar/unipolar helpers.
pub mod lfo;
/// Linear and squared (perceptual) range mapping.
pub mod mapping;
/// Waveform generators and the shared sine table.
pub mod oscillator;

pub use oscillator::{Oscillator, SineTable, Waveform};
