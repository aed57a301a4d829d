//! Performance benchmarks for the segmentation operators.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use windrow::{DelimiterPolicy, SegmentExt};

fn source(len: u64) -> Vec<u64> {
    (0..len).map(|i| (i * 2654435761) % 1009).collect()
}

fn benchmark_segmentation(c: &mut Criterion) {
    let data = source(10_000);

    c.bench_function("batched_n=64_len=10k", |b| {
        b.iter(|| {
            let batches: usize = data.clone().into_iter().batched(64).map(|v| v.len()).sum();
            black_box(batches);
        });
    });

    c.bench_function("split_when_len=10k", |b| {
        b.iter(|| {
            let segments = data
                .clone()
                .into_iter()
                .split_when(|x| x % 101 == 0, DelimiterPolicy::Drop)
                .count();
            black_box(segments);
        });
    });

    c.bench_function("match_ranges_len=10k", |b| {
        b.iter(|| {
            let runs = data.clone().into_iter().match_ranges(|x| x % 2 == 0).count();
            black_box(runs);
        });
    });

    c.bench_function("distinct_by_len=10k", |b| {
        b.iter(|| {
            let survivors = data.clone().into_iter().distinct_by(|x| *x).count();
            black_box(survivors);
        });
    });

    c.bench_function("join_display_len=10k", |b| {
        b.iter(|| {
            let joined = data.clone().into_iter().join_display(",");
            black_box(joined.len());
        });
    });
}

criterion_group!(benches, benchmark_segmentation);
criterion_main!(benches);
