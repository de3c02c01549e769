//! Benchmarks for the resonant low-pass.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use noisebox::dsp::filter::ResonantFilter;

use crate::{BLOCK_SIZES, SAMPLE_RATE};

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Generate a test signal (sawtooth-like ramp)
        let input: Vec<f32> = (0..size)
            .map(|i| (i as f32 / size as f32) * 2.0 - 1.0)
            .collect();

        // Fixed coefficients for the whole block
        let mut filter = ResonantFilter::new(SAMPLE_RATE);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lores", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                filter.render(black_box(&mut buffer), black_box(1_000.0), black_box(4.0));
            })
        });

        // Cutoff changing every sample, as under LFO modulation
        let mut filter = ResonantFilter::new(SAMPLE_RATE);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("lores_swept", size), &size, |b, _| {
            b.iter(|| {
                for (n, sample) in buffer.iter_mut().enumerate() {
                    let cutoff = 200.0 + n as f32 * 10.0;
                    *sample = filter.lores(input[n], black_box(cutoff), 4.0);
                }
            })
        });
    }

    group.finish();
}
