//! In-bucket sort strategies.
//!
//! The engine treats the per-bucket sort as a replaceable seam: anything
//! implementing [`BucketSort`] can drive it. Two strategies ship with the
//! crate:
//!
//! - [`BubbleSort`]: the default adjacent-exchange sort with early exit.
//! - [`NativeSort`]: delegates to the standard library's unstable sort
//!   (pdqsort) after the same comparability screen.
//!
//! Both refuse buckets whose elements lack a total order; see
//! [`SortError::Incomparable`](crate::errors::SortError::Incomparable).

use std::cmp::Ordering;

use crate::core::{BucketSort, Element};
use crate::errors::Result;

/// Adjacent-pair exchange sort with an early-exit pass flag.
///
/// Each pass bubbles the largest remaining value to the end of the
/// unsorted region; a pass with zero swaps terminates the sort. O(n²)
/// comparisons and swaps in the worst case, O(n) on already sorted
/// input.
///
/// # Examples
///
/// ```
/// use spansort::{BubbleSort, Element};
/// use spansort::core::BucketSort;
///
/// let mut elements: Vec<Element> = [3, 1, 2].map(Element::from).into();
/// BubbleSort.sort(&mut elements).unwrap();
/// assert_eq!(elements, [1, 2, 3].map(Element::from));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct BubbleSort;

impl BucketSort for BubbleSort {
    fn sort(&self, elements: &mut [Element]) -> Result<()> {
        let n = elements.len();
        for pass in 0..n {
            let mut swapped = false;
            for j in 0..n - pass - 1 {
                if elements[j].try_cmp(&elements[j + 1])? == Ordering::Greater {
                    elements.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }
        Ok(())
    }
}

/// Delegates to `slice::sort_unstable` (pdqsort).
///
/// A linear screen first surfaces the same fault bubble sort would hit
/// pairwise; after the screen the bucket is known to be all finite-order
/// numbers, and `f64::total_cmp` gives the total order.
#[derive(Clone, Copy, Debug, Default)]
pub struct NativeSort;

impl BucketSort for NativeSort {
    fn sort(&self, elements: &mut [Element]) -> Result<()> {
        for pair in elements.windows(2) {
            pair[0].try_cmp(&pair[1])?;
        }
        elements.sort_unstable_by(|a, b| match (a, b) {
            (Element::Number(x), Element::Number(y)) => x.total_cmp(y),
            // Unreachable past the screen above.
            _ => Ordering::Equal,
        });
        Ok(())
    }
}
