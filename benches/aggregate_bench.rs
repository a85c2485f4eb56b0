use criterion::{criterion_group, criterion_main, Criterion};
use hitzone::zone::{aggregate, Point};
use std::hint::black_box;

fn synthetic_points(count: usize, seed: u64) -> Vec<Point> {
    let mut rng = fastrand::Rng::with_seed(seed);
    (0..count)
        .map(|_| Point::new(rng.u8(0..100), rng.u8(0..100)))
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let hits = synthetic_points(10_000, 1);
    let strikes = synthetic_points(10_000, 2);

    c.bench_function("aggregate_20x20", |b| {
        b.iter(|| aggregate(black_box(&hits), black_box(&strikes), 20).unwrap())
    });

    c.bench_function("aggregate_100x100", |b| {
        b.iter(|| aggregate(black_box(&hits), black_box(&strikes), 100).unwrap())
    });
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
