//! Benchmarks for DSP primitives and the full engine.
//!
//! Run with: cargo bench
//!
//! The engine must fill every callback well inside its deadline.
//! Reference timing at the 22050 Hz engine rate:
//!   - 64 frames  = 2.90ms deadline
//!   - 128 frames = 5.80ms deadline
//!   - 256 frames = 11.61ms deadline
//!   - 512 frames = 23.22ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Low-level primitives (oscillator, filter, distortion)
//!   - scenarios/*  The complete engine under realistic control activity

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

/// Rate the engine runs at.
pub const SAMPLE_RATE: f32 = 22_050.0;

criterion_group!(
    benches,
    // Low-level DSP primitives
    dsp::bench_oscillator,
    dsp::bench_filter,
    dsp::bench_distortion,
    // Full engine
    scenarios::bench_engine,
);
criterion_main!(benches);
