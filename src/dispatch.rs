//! Bucket fan-out/fan-in and the top-level sort entry points.

use log::debug;
use rayon::prelude::*;

use crate::algo::BubbleSort;
use crate::core::{Bucket, BucketKind, BucketSort, Element, Partition};
use crate::errors::{Result, SortError};
use crate::partition::partition;

/// Hard ceiling on concurrent workers, regardless of the requested count.
///
/// Excess parallelism is clamped to this ceiling, never rejected; the
/// workload is CPU-bound and per-bucket, so anything beyond it only adds
/// scheduling overhead.
pub const MAX_WORKERS: usize = 60;

/// Sorts every bucket of `partition` and returns the buckets in their
/// original order.
///
/// With `worker_count == 1` buckets are sorted in place one after
/// another, no pool machinery involved. With more workers a fresh pool
/// of `min(worker_count, MAX_WORKERS)` threads is built for this call,
/// each bucket becomes one independent task owning its elements, and
/// results are collected by submission index, so completion order never
/// leaks into the output. The pool is torn down before the call returns.
///
/// The opaque bucket, if present, bypasses the strategy and comes back
/// untouched.
///
/// # Errors
///
/// - [`SortError::InvalidConfig`] if `worker_count` is zero.
/// - The first strategy failure aborts the whole call; a partially
///   sorted set of buckets is never returned.
/// - [`SortError::Pool`] if the worker pool cannot be built.
pub fn dispatch<S: BucketSort + ?Sized>(
    partition: Partition,
    strategy: &S,
    worker_count: usize,
) -> Result<Vec<Bucket>> {
    if worker_count == 0 {
        return Err(SortError::InvalidConfig {
            parameter: "worker_count",
            value: 0,
        });
    }

    let mut buckets = partition.into_buckets();

    if worker_count == 1 {
        for bucket in &mut buckets {
            sort_bucket(bucket, strategy)?;
        }
        return Ok(buckets);
    }

    let workers = worker_count.min(MAX_WORKERS);
    if workers < worker_count {
        debug!("clamping requested {worker_count} workers to {workers}");
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()?;

    // Indexed collect keeps bucket order stable whatever the completion
    // order; the first failing task fails the whole collect.
    pool.install(|| {
        buckets
            .into_par_iter()
            .map(|mut bucket| {
                sort_bucket(&mut bucket, strategy)?;
                Ok(bucket)
            })
            .collect::<Result<Vec<_>>>()
    })
}

fn sort_bucket<S: BucketSort + ?Sized>(bucket: &mut Bucket, strategy: &S) -> Result<()> {
    // The opaque bucket has no total order to sort by; it is emitted
    // as-is, in the order the partitioner fixed.
    if bucket.kind() == BucketKind::Opaque {
        return Ok(());
    }
    strategy.sort(bucket.elements_mut())
}

/// Concatenates sorted buckets, in bucket order, into the final sequence.
///
/// Pure splicing, no comparison work: correctness rests on the
/// partitioner's ascending, non-overlapping spans and on each bucket
/// being internally sorted.
pub fn merge(buckets: Vec<Bucket>) -> Vec<Element> {
    let total = buckets.iter().map(Bucket::len).sum();
    let mut merged = Vec::with_capacity(total);
    for bucket in buckets {
        merged.extend(bucket.into_elements());
    }
    merged
}

/// Sorts `elements` ascending by range-partitioning them into
/// `bucket_count` buckets and sorting each bucket with [`BubbleSort`]
/// across up to `worker_count` parallel workers.
///
/// `worker_count == 1` degenerates to a fully sequential sort of the
/// same partition. Opaque elements come out after all numbers, in
/// encounter order. The result is independent of `worker_count`;
/// parallelism only changes wall-clock behavior.
///
/// # Errors
///
/// Returns [`SortError::InvalidConfig`] if `worker_count` or
/// `bucket_count` is zero, before any partitioning work is done.
///
/// # Examples
///
/// ```
/// use spansort::{spansort, Element};
///
/// let data: Vec<Element> = [5, 1, 4, 2, 8].map(Element::from).into();
/// let sorted = spansort(data, 2, 2).unwrap();
///
/// assert_eq!(sorted, [1, 2, 4, 5, 8].map(Element::from));
/// ```
///
/// Mixed collections keep opaque tokens at the tail:
///
/// ```
/// use spansort::{spansort, Element};
///
/// let data = vec![
///     Element::from(3),
///     Element::from("a"),
///     Element::from(1.5),
///     Element::from("b"),
///     Element::from(2),
/// ];
/// let sorted = spansort(data, 2, 2).unwrap();
///
/// assert_eq!(
///     sorted,
///     vec![
///         Element::from(1.5),
///         Element::from(2),
///         Element::from(3),
///         Element::from("a"),
///         Element::from("b"),
///     ],
/// );
/// ```
pub fn spansort(
    elements: Vec<Element>,
    worker_count: usize,
    bucket_count: usize,
) -> Result<Vec<Element>> {
    spansort_with(elements, worker_count, bucket_count, &BubbleSort)
}

/// [`spansort`] with a caller-chosen in-bucket strategy.
///
/// # Examples
///
/// ```
/// use spansort::{spansort_with, Element, NativeSort};
///
/// let data: Vec<Element> = [9, -3, 7, 0].map(Element::from).into();
/// let sorted = spansort_with(data, 4, 2, &NativeSort).unwrap();
///
/// assert_eq!(sorted, [-3, 0, 7, 9].map(Element::from));
/// ```
pub fn spansort_with<S: BucketSort + ?Sized>(
    elements: Vec<Element>,
    worker_count: usize,
    bucket_count: usize,
    strategy: &S,
) -> Result<Vec<Element>> {
    // Configuration is rejected before any partitioning work begins.
    if worker_count == 0 {
        return Err(SortError::InvalidConfig {
            parameter: "worker_count",
            value: 0,
        });
    }

    let buckets = dispatch(partition(elements, bucket_count)?, strategy, worker_count)?;
    Ok(merge(buckets))
}
