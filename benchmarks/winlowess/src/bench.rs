//! Windowed LOWESS benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 100K points)
//! - Half-width (window size)
//! - Engine choice (custom kernel vs reference span fit)
//! - Sequential vs parallel drivers
//!
//! Use `WINLOWESS_MODE=serial cargo bench` for the sequential driver only.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fastWinlowess::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn modes() -> &'static [(&'static str, bool)] {
    match env::var("WINLOWESS_MODE").ok().as_deref() {
        Some("serial") => &[("serial", false)],
        Some("parallel") => &[("parallel", true)],
        _ => &[("serial", false), ("parallel", true)],
    }
}

fn smoother(half_width: usize, engine: Engine, parallel: bool) -> ParallelSmoother<f64> {
    WinLowess::new()
        .half_width(half_width)
        .engine(engine)
        .parallel(parallel)
        .build()
        .unwrap()
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Yearly temperature anomalies: slow warming trend plus Gaussian noise.
fn generate_temperature_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.12).unwrap();

    (0..size)
        .map(|i| {
            let t = i as f64 / size as f64;
            -0.3 + 1.2 * t * t + noise.sample(&mut rng)
        })
        .collect()
}

/// Random walk (financial-style series).
fn generate_random_walk(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let step = Normal::new(0.0, 1.0).unwrap();

    let mut level = 0.0;
    (0..size)
        .map(|_| {
            level += step.sample(&mut rng);
            level
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(20);

    for &size in &[1_000, 10_000, 100_000] {
        let data = generate_temperature_data(size, 42);
        group.throughput(Throughput::Elements(size as u64));

        for &(mode, parallel) in modes() {
            let model = smoother(5, Engine::Custom, parallel);
            group.bench_with_input(BenchmarkId::new(mode, size), &data, |b, data| {
                b.iter(|| model.fit(black_box(data.as_slice())).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_half_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("half_width");
    let data = generate_random_walk(10_000, 7);

    for &h in &[2, 5, 20, 100] {
        for &(mode, parallel) in modes() {
            let model = smoother(h, Engine::Custom, parallel);
            group.bench_with_input(BenchmarkId::new(mode, h), &data, |b, data| {
                b.iter(|| model.fit(black_box(data.as_slice())).unwrap())
            });
        }
    }
    group.finish();
}

fn bench_engines(c: &mut Criterion) {
    let mut group = c.benchmark_group("engines");
    let data = generate_temperature_data(5_000, 1);

    for engine in [Engine::Custom, Engine::Reference] {
        for &(mode, parallel) in modes() {
            let model = smoother(10, engine, parallel);
            group.bench_with_input(BenchmarkId::new(engine.name(), mode), &data, |b, data| {
                b.iter(|| model.fit(black_box(data.as_slice())).unwrap())
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_scalability, bench_half_width, bench_engines);
criterion_main!(benches);
