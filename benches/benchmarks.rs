use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use indicatif::ProgressBar;
use probviz::binomial::Binomial;
use probviz::clt::CltExperiment;
use probviz::histogram::Histogram;

pub fn bench_pmf_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("Binomial mass function");

    for n in [10u64, 100, 1000, 10000] {
        group.bench_with_input(BenchmarkId::new("pmf table", n), &n, |b, n| {
            let binomial = Binomial::new(*n, 0.3).unwrap();
            b.iter(|| binomial.pmf_table())
        });
        group.bench_with_input(BenchmarkId::new("pmf one by one", n), &n, |b, n| {
            let binomial = Binomial::new(*n, 0.3).unwrap();
            b.iter(|| (0..=*n).map(|k| binomial.pmf(k)).sum::<f64>())
        });
    }
    group.finish();
}

pub fn bench_clt_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("CLT batch");
    group.sample_size(10);

    for n in [1, 30, 100] {
        group.bench_with_input(BenchmarkId::new("sample means", n), &n, |b, n| {
            let experiment = CltExperiment {
                sample_sizes: vec![*n],
                experiments: 10_000,
                ..Default::default()
            };
            let pbar = ProgressBar::hidden();
            b.iter(|| experiment.run(&pbar).unwrap())
        });
    }
    group.finish();
}

pub fn bench_histogram(c: &mut Criterion) {
    use rand::prelude::*;
    use rand_distr::Uniform;
    use rand_xoshiro::Xoshiro256PlusPlus;

    let rng = Xoshiro256PlusPlus::seed_from_u64(12344);
    let values: Vec<f64> = rng.sample_iter(Uniform::new(0.0, 1.0)).take(100_000).collect();

    c.bench_function("density histogram", |b| {
        b.iter(|| Histogram::density(&values, black_box(50)))
    });
}

criterion_group!(benches, bench_pmf_table, bench_clt_batch, bench_histogram);
criterion_main!(benches);
