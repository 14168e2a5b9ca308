//! Performance measurement for full-frame stereogram generation

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use stereodot::depth::UniformDepth;
use stereodot::random::RandomField;
use stereodot::render::{RenderConfig, render_with_threads};
use stereodot::spatial::{Canvas, Rect};

/// Measures single-threaded render cost as the frame grows
fn bench_render_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_sequential");

    for size in &[128usize, 256, 512] {
        let depth_map = UniformDepth::new(Rect::from_size(*size as i64, *size as i64), 12);
        let pattern = RandomField::new(42);
        let config = RenderConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut canvas = Canvas::new(size + config.part_size, size);
                let result = render_with_threads(
                    black_box(&depth_map),
                    black_box(&pattern),
                    &config,
                    &mut canvas,
                    1,
                );
                black_box((result.is_ok(), canvas));
            });
        });
    }

    group.finish();
}

/// Measures the row-parallel fan-out against the same frames
fn bench_render_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_parallel");

    for size in &[256usize, 512] {
        let depth_map = UniformDepth::new(Rect::from_size(*size as i64, *size as i64), 12);
        let pattern = RandomField::new(42);
        let config = RenderConfig::default();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut canvas = Canvas::new(size + config.part_size, size);
                let result = render_with_threads(
                    black_box(&depth_map),
                    black_box(&pattern),
                    &config,
                    &mut canvas,
                    0,
                );
                black_box((result.is_ok(), canvas));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_sequential, bench_render_parallel);
criterion_main!(benches);
