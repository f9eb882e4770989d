//! Benchmarks for field generation and per-tick advection.
//!
//! Run with: `cargo bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use motefield::prelude::*;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    group.bench_function("ambient_800", |b| {
        b.iter(|| black_box(FieldConfig::ambient().with_seed(1).generate()))
    });

    group.bench_function("environment_4500", |b| {
        b.iter(|| black_box(FieldConfig::environment().with_seed(1).generate()))
    });

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    group.bench_function("ambient_800", |b| {
        let mut field = FieldConfig::ambient().with_seed(2).generate();
        b.iter(|| {
            field.advance();
            black_box(field.positions_flat().len())
        })
    });

    group.bench_function("environment_4500", |b| {
        let mut field = FieldConfig::environment().with_seed(2).generate();
        b.iter(|| {
            field.advance();
            black_box(field.positions_flat().len())
        })
    });

    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    group.bench_function("vertices_4500", |b| {
        let field = FieldConfig::environment().with_seed(3).generate();
        b.iter(|| black_box(field.vertices()))
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_advance, bench_snapshot);
criterion_main!(benches);
