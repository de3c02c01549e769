//! Benchmarks for the complete engine callback.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use noisebox::{synth::message::SynthMessage, EngineConfig, SynthEngine};

use crate::BLOCK_SIZES;

pub fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/engine");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size * 2];

        // === STEADY NOTE ===
        // power-on patch, gate open, no controller activity
        let mut engine = SynthEngine::new(&EngineConfig::default());
        engine.controller().apply(SynthMessage::NoteOn {
            note: 37,
            velocity: 100,
        });
        group.bench_with_input(BenchmarkId::new("steady", size), &size, |b, _| {
            b.iter(|| {
                black_box(engine.render_interleaved(black_box(&mut buffer), 2));
            })
        });

        // === KNOB TWISTING ===
        // cutoff modulation plus a controller update before every callback
        let mut engine = SynthEngine::new(&EngineConfig::default());
        let controller = engine.controller();
        controller.apply(SynthMessage::NoteOn {
            note: 36,
            velocity: 100,
        });
        controller.apply(SynthMessage::ControlChange {
            controller: 4,
            value: 0,
        });
        let mut value = 0u8;
        group.bench_with_input(BenchmarkId::new("twisting", size), &size, |b, _| {
            b.iter(|| {
                value = (value + 1) % 128;
                controller.apply(SynthMessage::ControlChange {
                    controller: 5,
                    value,
                });
                black_box(engine.render_interleaved(black_box(&mut buffer), 2));
            })
        });

        // === MUTED ===
        // chain keeps running behind a closed gate
        let mut engine = SynthEngine::new(&EngineConfig::default());
        group.bench_with_input(BenchmarkId::new("muted", size), &size, |b, _| {
            b.iter(|| {
                black_box(engine.render_interleaved(black_box(&mut buffer), 2));
            })
        });
    }

    group.finish();
}
