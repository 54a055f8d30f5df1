//! Criterion benchmarks comparing the multiplication strategies.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rowmul::{matmul_pooled, matmul_row_per_thread, matmul_sequential, random_pair_seeded};

fn bench_multipliers(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for size in [8usize, 32, 64] {
        let (a, b) = random_pair_seeded(size, size, 42).unwrap();
        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bench, _| {
            bench.iter(|| matmul_sequential(&a, &b).unwrap())
        });
        group.bench_with_input(
            BenchmarkId::new("row_per_thread", size),
            &size,
            |bench, _| bench.iter(|| matmul_row_per_thread(&a, &b).unwrap()),
        );
        group.bench_with_input(BenchmarkId::new("pooled_4", size), &size, |bench, _| {
            bench.iter(|| matmul_pooled(&a, &b, 4).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multipliers);
criterion_main!(benches);
