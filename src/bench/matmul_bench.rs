use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tiled_matmul::{Config, Matrix, Multiplier, Strategy, WorkerCount};

fn bench_strategies(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let multiplier = Multiplier::new(Config::default().with_workers(WorkerCount::Available));
    let mut group = c.benchmark_group("matmul");
    group.sample_size(10);

    for size in [128, 256, 512] {
        let a: Matrix<i32> = Matrix::random(size, 0..100, &mut rng);
        let b: Matrix<i32> = Matrix::random(size, 0..100, &mut rng);

        for strategy in Strategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &size,
                |bencher, &n| {
                    let mut r = Matrix::zeros(n);
                    bencher.iter(|| {
                        r.fill_zero();
                        multiplier
                            .multiply(strategy, black_box(&a), black_box(&b), &mut r)
                            .unwrap();
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_block_edge(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let size = 256;
    let a: Matrix<i32> = Matrix::random(size, 0..100, &mut rng);
    let b: Matrix<i32> = Matrix::random(size, 0..100, &mut rng);
    let mut group = c.benchmark_group("block_edge");
    group.sample_size(10);

    for edge in [4, 16, 64, 256] {
        let multiplier = Multiplier::new(Config::default().with_block_edge(edge));
        group.bench_with_input(BenchmarkId::new("tiled", edge), &edge, |bencher, _| {
            let mut r = Matrix::zeros(size);
            bencher.iter(|| {
                r.fill_zero();
                multiplier
                    .multiply(Strategy::Tiled, black_box(&a), black_box(&b), &mut r)
                    .unwrap();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_block_edge);
criterion_main!(benches);
