//! Range partitioning of element collections.

use log::debug;

use crate::core::{Bucket, Element, Partition, Span};
use crate::errors::{Result, SortError};

/// Splits `elements` into `bucket_count` range buckets plus, when opaque
/// elements are present, one trailing opaque bucket.
///
/// The numeric extent is widened to whole numbers (`floor(min)`,
/// `ceil(max)`) and divided into `bucket_count` half-open spans of equal
/// whole-number width; the last bucket additionally absorbs every value
/// at or above its own lower bound, so no element is ever dropped by
/// rounding. Opaque elements keep their encounter order.
///
/// A narrow extent can collapse the span width to zero, funneling every
/// numeric element into the last bucket. That is a performance
/// degeneracy, not an error;
/// [`validate_config`](crate::config::validate_config) reports it as an
/// advisory.
///
/// The multiset of elements across the returned buckets always equals
/// the multiset of the input.
///
/// # Errors
///
/// Returns [`SortError::InvalidConfig`] if `bucket_count` is zero.
///
/// # Examples
///
/// ```
/// use spansort::{partition, Element, Span};
///
/// let elements = vec![
///     Element::from(5),
///     Element::from(1),
///     Element::from(4),
///     Element::from(2),
///     Element::from(8),
/// ];
/// let partition = partition(elements, 2).unwrap();
///
/// assert_eq!(partition.len(), 2);
/// assert_eq!(partition.buckets()[0].span(), Some(Span { lo: 1.0, hi: 4.0 }));
/// assert_eq!(
///     partition.buckets()[0].elements(),
///     &[Element::from(1), Element::from(2)],
/// );
/// ```
pub fn partition(elements: Vec<Element>, bucket_count: usize) -> Result<Partition> {
    if bucket_count == 0 {
        return Err(SortError::InvalidConfig {
            parameter: "bucket_count",
            value: 0,
        });
    }

    // Segregate opaque elements up front, keeping encounter order, so the
    // range buckets stay homogeneous.
    let mut numbers = Vec::with_capacity(elements.len());
    let mut opaque = Vec::new();
    for element in elements {
        match element {
            Element::Number(value) => numbers.push(value),
            token => opaque.push(token),
        }
    }

    let mut buckets = if numbers.is_empty() && !opaque.is_empty() {
        // No numeric extent to divide; the opaque bucket carries everything.
        Vec::new()
    } else {
        range_buckets(numbers, bucket_count)
    };

    if !opaque.is_empty() {
        buckets.push(Bucket::opaque(opaque));
    }

    Ok(Partition::new(buckets))
}

/// Distributes numeric values into `bucket_count` contiguous range buckets.
fn range_buckets(numbers: Vec<f64>, bucket_count: usize) -> Vec<Bucket> {
    if numbers.is_empty() {
        return vec![Bucket::numeric(None); bucket_count];
    }

    let lo = numbers.iter().copied().fold(f64::INFINITY, f64::min).floor();
    let hi = numbers
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max)
        .ceil();
    let factor = ((hi - lo) / bucket_count as f64).floor();

    debug!(
        "partitioning {} numeric elements over extent [{lo}, {hi}] into {bucket_count} buckets of width {factor}",
        numbers.len(),
    );

    let mut buckets: Vec<Bucket> = (0..bucket_count)
        .map(|i| {
            let span_lo = lo + factor * i as f64;
            Bucket::numeric(Some(Span {
                lo: span_lo,
                hi: span_lo + factor,
            }))
        })
        .collect();

    for value in numbers {
        // floor((value - lo) / factor) picks the half-open span; anything
        // landing at or past the last span's lower bound is clamped into
        // the last bucket. A zero factor sends every value there.
        let index = if factor > 0.0 {
            (((value - lo) / factor) as usize).min(bucket_count - 1)
        } else {
            bucket_count - 1
        };
        buckets[index].push(Element::Number(value));
    }

    buckets
}
