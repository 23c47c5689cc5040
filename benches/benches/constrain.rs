// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use understory_pan_zoom::{Fence, clamp_to_min_span, constrain};
use understory_scale::LinearScale;

fn proposals(n: usize, seed: u64) -> Vec<([f64; 2], [f64; 2])> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let mut domain = || {
                let lo = rng.random_range(-200.0..200.0);
                [lo, lo + rng.random_range(1.0..300.0)]
            };
            (domain(), domain())
        })
        .collect()
}

fn bench_constrain(c: &mut Criterion) {
    let x = LinearScale::new([0.0, 100.0], [0.0, 800.0]);
    let y = LinearScale::new([0.0, 100.0], [600.0, 0.0]);
    let fence = Fence::x(0.0, 100.0).with_y(0.0, 100.0);
    let inputs = proposals(1_000, 3);

    c.bench_function("constrain_1k", |b| {
        b.iter(|| {
            for &(xd, yd) in &inputs {
                black_box(constrain(black_box(xd), black_box(yd), &fence, &x, &y));
            }
        });
    });

    c.bench_function("clamp_to_min_span_1k", |b| {
        b.iter(|| {
            for &(previous, domain) in &inputs {
                black_box(clamp_to_min_span(50.0, black_box(previous), black_box(domain)));
            }
        });
    });
}

criterion_group!(benches, bench_constrain);
criterion_main!(benches);
