use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dm_matrix::{multiply_accelerated, multiply_naive, multiply_tiled, Matrix};

fn filled(nrow: usize, ncol: usize) -> Matrix {
    let data: Vec<f64> = (0..nrow * ncol).map(|i| (i % 10) as f64 * 0.1).collect();
    Matrix::from_col_major(nrow, ncol, data).unwrap()
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let a = filled(size, size);
        let b = filled(size, size);

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bench, _| {
            bench.iter(|| multiply_naive(black_box(&a), black_box(&b)))
        });

        for tile in [16, 32, 64] {
            group.bench_with_input(
                BenchmarkId::new(format!("tiled_{}", tile), size),
                &size,
                |bench, _| bench.iter(|| multiply_tiled(black_box(&a), black_box(&b), tile).unwrap()),
            );
        }

        group.bench_with_input(BenchmarkId::new("accelerated", size), &size, |bench, _| {
            bench.iter(|| multiply_accelerated(black_box(&a), black_box(&b)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_multiply);
criterion_main!(benches);
