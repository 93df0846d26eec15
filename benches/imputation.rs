//! Missing-value fill benchmarks.

mod common;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use data_explorer::processing::fill_missing;

fn bench_fill_missing(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_missing");
    for rows in [1_000, 10_000, 100_000] {
        let ds = common::dataset(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &ds, |b, ds| {
            b.iter_batched(
                || ds.clone(),
                |mut ds| black_box(fill_missing(&mut ds)),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fill_missing);
criterion_main!(benches);
