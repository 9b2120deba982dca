use bit_reservoir::{Generator, ParkMiller};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_reservoir(c: &mut Criterion) {
    let mut rng = Generator::new(ParkMiller::new());

    c.bench_function("random_bits 1", |b| b.iter(|| rng.random_bits(black_box(1))));
    c.bench_function("random_bits 8", |b| b.iter(|| rng.random_bits(black_box(8))));
    c.bench_function("random_range 0..1000", |b| {
        b.iter(|| rng.random_range(black_box(0), black_box(1_000)))
    });
}

criterion_group!(benches, bench_reservoir);
criterion_main!(benches);
