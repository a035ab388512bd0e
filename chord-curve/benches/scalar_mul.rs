use criterion::{criterion_group, criterion_main, Criterion};

use chord_curve::arithmetic::Point;
use chord_curve::curve::NistP256;

use rand::rngs::OsRng;
use rand::RngCore;

fn bench_scalar_mul(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_mul");

    let mut rng = OsRng;
    let generator = Point::<NistP256>::GENERATOR;

    let mut scalar = [0u8; 32];
    rng.fill_bytes(&mut scalar);

    group.bench_function("binary", |b| b.iter(|| generator.scalar_mul(&scalar)));

    group.bench_function("signed_digit", |b| {
        b.iter(|| generator.scalar_mul_naf(&scalar))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar_mul);
criterion_main!(benches);
