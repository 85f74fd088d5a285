//! # Spansort
//!
//! `spansort` is a partitioned parallel sorting library: it splits a
//! collection into disjoint value-range buckets, sorts each bucket
//! independently (optionally across a bounded worker pool), and splices
//! the results back into one ascending sequence.
//!
//! ## Key Features
//!
//! - **Range partitioning**: The data's numeric extent is divided into
//!   contiguous, non-overlapping spans; every element lands in exactly
//!   one bucket, so merging is pure concatenation with no comparison
//!   work.
//! - **Bounded parallelism**: Each bucket is one independent unit of
//!   work on a pool of at most [`MAX_WORKERS`] threads, scoped to a
//!   single sort call. Workers share no mutable state; results come back
//!   in bucket order regardless of completion order.
//! - **Pluggable in-bucket sort**: The per-bucket algorithm is a
//!   strategy behind the [`BucketSort`] trait. [`BubbleSort`] is the
//!   default; [`NativeSort`] delegates to the standard library, and any
//!   correct comparison sort can be swapped in without touching the
//!   engine.
//! - **Mixed collections**: Values that carry no total order
//!   ([`Element::Opaque`]) are segregated into a trailing bucket instead
//!   of failing mid-comparison.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use spansort::{is_sorted, spansort, Element};
//!
//! let data: Vec<Element> = [5, 1, 4, 2, 8].map(Element::from).into();
//! let sorted = spansort(data, 2, 2).unwrap();
//!
//! assert!(is_sorted(&sorted));
//! assert_eq!(sorted, [1, 2, 4, 5, 8].map(Element::from));
//! ```
//!
//! ### Validating a configuration
//!
//! Degenerate configurations still sort correctly, only slower.
//! [`validate_config`] reports them as structured advisories and leaves
//! the decision to the caller; the library itself never prints:
//!
//! ```rust
//! use spansort::validate_config;
//!
//! let advisories = validate_config(-500.0, 500.0, 4, 100).unwrap();
//! assert!(advisories.is_empty());
//! ```
//!
//! ### Custom strategies
//!
//! ```rust
//! use spansort::{spansort_with, Element, NativeSort};
//!
//! let data: Vec<Element> = [9, -3, 7, 0].map(Element::from).into();
//! let sorted = spansort_with(data, 4, 2, &NativeSort).unwrap();
//!
//! assert_eq!(sorted, [-3, 0, 7, 9].map(Element::from));
//! ```
//!
//! ## Performance Characteristics
//!
//! - Partitioning and merging are O(N) with no comparisons.
//! - The in-bucket cost depends on the strategy: O(n²) per bucket for
//!   [`BubbleSort`], O(n log n) for [`NativeSort`], over bucket sizes
//!   n ≈ N / bucket_count for evenly spread data.
//! - Parallel speedup is bounded by the largest bucket; a numeric range
//!   narrower than the bucket count collapses everything into one bucket
//!   and serializes the work (see
//!   [`Advisory::RangeNarrowerThanBuckets`]).

pub mod algo;
pub mod check;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod partition;

pub use crate::algo::{BubbleSort, NativeSort};
pub use crate::check::is_sorted;
pub use crate::config::{Advisory, validate_config};
pub use crate::core::{Bucket, BucketKind, BucketSort, Element, Partition, Span};
pub use crate::dispatch::{MAX_WORKERS, dispatch, merge, spansort, spansort_with};
pub use crate::errors::{Result, SortError};
pub use crate::partition::partition;

pub mod prelude {
    pub use crate::algo::{BubbleSort, NativeSort};
    pub use crate::check::is_sorted;
    pub use crate::config::{Advisory, validate_config};
    pub use crate::core::{BucketSort, Element};
    pub use crate::dispatch::{spansort, spansort_with};
    pub use crate::errors::{Result, SortError};
}
