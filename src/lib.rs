pub mod config;
pub mod dsp;
pub mod io;
pub mod synth; // Engine, shared parameters and control handling
#[cfg(feature = "rtrb")]
pub mod telemetry;

pub use config::{ConfigError, EngineConfig, Patch};
pub use synth::engine::{BlockStats, SynthController, SynthEngine};

/// Output rate the engine is tuned for.
pub const SAMPLE_RATE: f32 = 22_050.0;
/// Frames requested from the audio device per callback.
pub const BUFFER_FRAMES: usize = 128;
/// Fixed attenuation applied after distortion.
pub const HEADROOM: f32 = 0.7;
/// Largest callback size a configuration may request.
pub const MAX_BUFFER_FRAMES: usize = 2048;
