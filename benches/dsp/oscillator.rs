//! Benchmarks for oscillator waveform generation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use noisebox::dsp::oscillator::{Oscillator, SineTable, Waveform};

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let table = SineTable::shared();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - table lookup with interpolation; Saw - linear ramp;
        // Square - branch per sample; Triangle - absolute value
        for (name, waveform) in [
            ("sine", Waveform::Sine),
            ("saw", Waveform::Saw),
            ("square", Waveform::Square),
            ("triangle", Waveform::Triangle),
        ] {
            let mut osc = Oscillator::new(table.clone(), waveform, 440.0, SAMPLE_RATE);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for sample in buffer.iter_mut() {
                        *sample = osc.next_sample();
                    }
                    black_box(&mut buffer);
                })
            });
        }
    }

    group.finish();
}
