use bitfeature::BitVector;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::SmallRng, SeedableRng};
use std::hint::black_box;

fn vector_ops(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut group = c.benchmark_group("bit_vector");
    for dim in [64, 1024, 16384] {
        let a = BitVector::random(&mut rng, dim);
        let b = BitVector::random(&mut rng, dim);

        group.bench_with_input(BenchmarkId::new("negate", dim), &a, |bench, a| {
            bench.iter(|| black_box(a.negate()))
        });
        group.bench_with_input(BenchmarkId::new("combine", dim), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.combine(b)))
        });
        group.bench_with_input(BenchmarkId::new("set_bits", dim), &a, |bench, a| {
            bench.iter(|| black_box(a.set_bits()))
        });
        group.bench_with_input(BenchmarkId::new("vector", dim), &a, |bench, a| {
            bench.iter(|| black_box(a.vector()))
        });
    }
    group.finish();
}

criterion_group!(benches, vector_ops);
criterion_main!(benches);
