use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use spansort::prelude::*;
use std::hint::black_box;

fn bench_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strategy Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let input: Vec<Element> = (0..count)
        .map(|_| Element::from(rng.random_range(-500.0..500.0)))
        .collect();

    group.bench_function("spansort (bubble, 4 workers)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| spansort(black_box(data), 4, 100).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("spansort (native, 4 workers)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| spansort_with(black_box(data), 4, 100, &NativeSort).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("spansort (bubble, sequential)", |b| {
        b.iter_batched(
            || input.clone(),
            |data| spansort(black_box(data), 1, 100).unwrap(),
            BatchSize::SmallInput,
        )
    });

    // Baseline: plain unstable slice sort on the raw values.
    let raw: Vec<f64> = input.iter().filter_map(Element::as_number).collect();
    group.bench_function("slice::sort_unstable (baseline)", |b| {
        b.iter_batched(
            || raw.clone(),
            |mut data| data.sort_unstable_by(f64::total_cmp),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_bucket_counts(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bucket Counts");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let input: Vec<Element> = (0..count)
        .map(|_| Element::from(rng.random_range(-500.0..500.0)))
        .collect();

    // Fewer buckets mean bigger buckets; bubble's quadratic cost makes
    // the bucket count the dominant knob.
    for buckets in [10, 50, 100, 250, 500] {
        group.bench_function(format!("bubble, 4 workers, {buckets} buckets"), |b| {
            b.iter_batched(
                || input.clone(),
                |data| spansort(black_box(data), 4, buckets).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strategies, bench_bucket_counts);
criterion_main!(benches);
