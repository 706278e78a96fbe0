// SPDX-License-Identifier: LGPL-3.0-or-later

//! Criterion benchmarks for table construction and resampling throughput.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use sinc_resample::{default_table, resample, SincTable};

const BUF_SIZE: usize = 4096;

/// Generate a deterministic white noise buffer using a simple LCG.
fn white_noise(len: usize) -> Vec<f32> {
    let mut state: u64 = 0xDEAD_BEEF_CAFE_BABE;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            ((state >> 33) as i32) as f32 / (i32::MAX as f32)
        })
        .collect()
}

fn bench_table_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_build");

    for &(name, nz, spc) in &[
        ("13x512", 13usize, 512usize),
        ("32x512", 32, 512),
        ("32x1024", 32, 1024),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| SincTable::new(black_box(nz), black_box(spc), black_box(10.0)).unwrap());
        });
    }

    group.finish();
}

fn bench_resample_upsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_upsample");
    let table = default_table();
    let input = white_noise(BUF_SIZE);

    for &(name, ratio) in &[("2x", 2.0), ("2.5x", 2.5), ("16k_to_48k", 3.0)] {
        group.bench_function(name, |b| {
            b.iter(|| resample(black_box(&input), black_box(ratio), &table).unwrap());
        });
    }

    group.finish();
}

fn bench_resample_downsample(c: &mut Criterion) {
    let mut group = c.benchmark_group("resample_downsample");
    let table = default_table();
    let input = white_noise(BUF_SIZE);

    for &(name, ratio) in &[("0.5x", 0.5), ("48k_to_44k1", 44100.0 / 48000.0)] {
        group.bench_function(name, |b| {
            b.iter(|| resample(black_box(&input), black_box(ratio), &table).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_table_build,
    bench_resample_upsample,
    bench_resample_downsample
);
criterion_main!(benches);
