// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_pan_zoom::{Fence, GestureHost, PanZoom, PanZoomOptions, SpanLimits};
use understory_scale::{LinearScale, LogScale, Scale};

#[derive(Default)]
struct NullHost {
    frames: u64,
}

impl GestureHost for NullHost {
    fn request_frame(&mut self) {
        self.frames += 1;
    }

    fn domains_changed(&mut self, x_domain: [f64; 2], y_domain: [f64; 2]) {
        black_box((x_domain, y_domain));
    }
}

fn options() -> PanZoomOptions {
    PanZoomOptions::default()
        .with_constraint(Fence::x(0.0, 1_000.0).with_y(0.0, 1_000.0))
        .with_min_zoom(SpanLimits::new(1_000.0, 1_000.0))
        .with_max_zoom(SpanLimits::new(1.0, 1.0))
}

fn engine<S: Scale>(x: S, y: S) -> PanZoom<u32, S, NullHost> {
    PanZoom::new(x, y, NullHost::default(), options())
}

/// Random walk of `n` pointer positions around the plot center.
fn walk(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pt = Point::new(400.0, 300.0);
    (0..n)
        .map(|_| {
            pt.x = (pt.x + rng.random_range(-8.0..8.0)).clamp(0.0, 800.0);
            pt.y = (pt.y + rng.random_range(-8.0..8.0)).clamp(0.0, 600.0);
            pt
        })
        .collect()
}

fn bench_pointer_moves(c: &mut Criterion) {
    let moves = walk(1_000, 7);
    let mut group = c.benchmark_group("pointer_moves");

    group.bench_function("pan_linear_1k", |b| {
        b.iter_batched(
            || {
                let mut pz = engine(
                    LinearScale::new([0.0, 1_000.0], [0.0, 800.0]),
                    LinearScale::new([0.0, 1_000.0], [600.0, 0.0]),
                );
                pz.on_pointer_down(0, Point::new(400.0, 300.0));
                pz
            },
            |mut pz| {
                for &pt in &moves {
                    pz.on_pointer_move(&0, pt);
                }
                pz.on_frame();
                black_box(pz.x_scale().domain())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pinch_linear_1k", |b| {
        b.iter_batched(
            || {
                let mut pz = engine(
                    LinearScale::new([0.0, 1_000.0], [0.0, 800.0]),
                    LinearScale::new([0.0, 1_000.0], [600.0, 0.0]),
                );
                pz.on_pointer_down(0, Point::new(200.0, 150.0));
                pz.on_pointer_down(1, Point::new(600.0, 450.0));
                pz
            },
            |mut pz| {
                for &pt in &moves {
                    pz.on_pointer_move(&1, pt + (200.0, 150.0));
                }
                pz.on_frame();
                black_box(pz.x_scale().domain())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("pinch_log_1k", |b| {
        b.iter_batched(
            || {
                let mut pz = engine(
                    LogScale::new([1.0, 1_000.0], [0.0, 800.0]),
                    LogScale::new([1.0, 1_000.0], [600.0, 0.0]),
                );
                pz.on_pointer_down(0, Point::new(200.0, 150.0));
                pz.on_pointer_down(1, Point::new(600.0, 450.0));
                pz
            },
            |mut pz| {
                for &pt in &moves {
                    pz.on_pointer_move(&1, pt + (200.0, 150.0));
                }
                pz.on_frame();
                black_box(pz.x_scale().domain())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_wheel(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(11);
    let steps: Vec<(Point, f64)> = (0..1_000)
        .map(|_| {
            let center = Point::new(rng.random_range(0.0..800.0), rng.random_range(0.0..600.0));
            let ratio = if rng.random_bool(0.5) { 1.1 } else { 1.0 / 1.1 };
            (center, ratio)
        })
        .collect();

    c.bench_function("wheel_zoom_1k", |b| {
        b.iter_batched(
            || {
                engine(
                    LinearScale::new([0.0, 1_000.0], [0.0, 800.0]),
                    LinearScale::new([0.0, 1_000.0], [600.0, 0.0]),
                )
            },
            |mut pz| {
                for &(center, ratio) in &steps {
                    pz.on_wheel_zoom(center, ratio);
                }
                pz.on_frame();
                black_box(pz.y_scale().domain())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_pointer_moves, bench_wheel);
criterion_main!(benches);
