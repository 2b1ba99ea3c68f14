#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for primitive rasterization and serialization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ascii_draw::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line");

    for (width, height) in [(80, 40), (200, 100), (1000, 500)] {
        let mut grid = Grid::new(width, height).expect("grid creation should succeed");
        let diagonal = Line::from_coords(0.0, 0.0, width as f64 - 1.0, height as f64 - 1.0);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &diagonal,
            |b, line| {
                b.iter(|| grid.draw(black_box(line), b'#').expect("line fits"));
            },
        );
    }

    group.finish();
}

fn curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");

    let mut grid = Grid::new(200, 100).expect("grid creation should succeed");
    let center = grid.center();

    for radius in [5.0, 20.0, 45.0] {
        group.bench_with_input(BenchmarkId::new("circle", radius), &radius, |b, &r| {
            b.iter(|| grid.draw(&Circle::new(center, black_box(r)), b'o').expect("circle fits"));
        });
        group.bench_with_input(BenchmarkId::new("spiral", radius), &radius, |b, &r| {
            b.iter(|| {
                grid.draw(&Spiral::new(center, black_box(r), 1.0), b'@').expect("spiral fits")
            });
        });
    }

    group.finish();
}

fn fill_and_render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_render");

    let mut grid = Grid::new(400, 200).expect("grid creation should succeed");
    let area = grid.bounds().fill();

    group.bench_function("fill_400x200", |b| {
        b.iter(|| grid.draw(black_box(&area), b'%').expect("fill fits"));
    });

    let encoder = TextEncoder::new().frame(Some('|'));
    group.bench_function("render_400x200", |b| {
        b.iter(|| encoder.render(black_box(&grid)));
    });

    group.finish();
}

criterion_group!(benches, line_benchmark, curve_benchmark, fill_and_render_benchmark);
criterion_main!(benches);
