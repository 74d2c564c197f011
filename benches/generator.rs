#![allow(clippy::all)]
//! Benchmarks for dataset generation itself.
//!
//! The sweep runner regenerates the name list before every measurement
//! iteration, so generation cost is worth knowing even though it sits
//! outside the timed region there.

mod common;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use iterbench::dataset;
use std::hint::black_box;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("dataset/generate");

    for variant in common::VARIANTS {
        group.bench_with_input(
            BenchmarkId::from_parameter(variant),
            &variant,
            |b, &variant| {
                b.iter(|| black_box(dataset::generate(variant)));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
