//! Real-world scenario benchmarks.
//!
//! These model the engine as the audio callback drives it: interleaved
//! stereo output with controllers moving between callbacks.

mod engine;

pub use engine::bench_engine;
