use bit_reservoir::{NativeSource, ParkMiller};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_native_ref(c: &mut Criterion) {
    let mut native = ParkMiller::new();

    c.bench_function("native random 2", |b| b.iter(|| native.random(black_box(2))));
    c.bench_function("native random 256", |b| b.iter(|| native.random(black_box(256))));
    c.bench_function("native random 1000", |b| b.iter(|| native.random(black_box(1_000))));
}

criterion_group!(benches, bench_native_ref);
criterion_main!(benches);
