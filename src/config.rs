//! Configuration validation and advisories.

use crate::errors::{Result, SortError};

/// A non-fatal configuration smell surfaced by [`validate_config`].
///
/// Advisories never stop a sort; the caller decides whether and how to
/// surface them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Advisory {
    /// The numeric range is narrower than the bucket count, so the span
    /// width collapses and the buckets come out lopsided.
    RangeNarrowerThanBuckets {
        /// Width of the expected numeric extent.
        range: f64,
        /// The requested bucket count.
        bucket_count: usize,
    },
    /// More workers requested than there are buckets to sort; the
    /// surplus workers stay idle.
    FewerBucketsThanWorkers {
        /// The requested bucket count.
        bucket_count: usize,
        /// The requested worker count.
        worker_count: usize,
    },
}

/// Validates a sort configuration before any partitioning work.
///
/// Hard violations (`worker_count` or `bucket_count` below 1) come back
/// as [`SortError::InvalidConfig`]; degenerate-but-workable choices come
/// back as [`Advisory`] values in an otherwise successful result.
/// `min_bound` and `max_bound` describe the numeric extent the caller
/// expects of the data.
///
/// # Examples
///
/// ```
/// use spansort::{validate_config, Advisory};
///
/// // 4 workers over 2 buckets: valid, but two workers will idle.
/// let advisories = validate_config(-500.0, 500.0, 4, 2).unwrap();
/// assert_eq!(
///     advisories,
///     vec![Advisory::FewerBucketsThanWorkers { bucket_count: 2, worker_count: 4 }],
/// );
///
/// assert!(validate_config(-500.0, 500.0, 0, 2).is_err());
/// ```
pub fn validate_config(
    min_bound: f64,
    max_bound: f64,
    worker_count: usize,
    bucket_count: usize,
) -> Result<Vec<Advisory>> {
    if worker_count == 0 {
        return Err(SortError::InvalidConfig {
            parameter: "worker_count",
            value: 0,
        });
    }
    if bucket_count == 0 {
        return Err(SortError::InvalidConfig {
            parameter: "bucket_count",
            value: 0,
        });
    }

    let mut advisories = Vec::new();

    let range = (max_bound - min_bound).abs();
    if range < bucket_count as f64 {
        advisories.push(Advisory::RangeNarrowerThanBuckets {
            range,
            bucket_count,
        });
    }
    if bucket_count < worker_count {
        advisories.push(Advisory::FewerBucketsThanWorkers {
            bucket_count,
            worker_count,
        });
    }

    Ok(advisories)
}
