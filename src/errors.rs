//! Error types for spansort operations.

use thiserror::Error;

use crate::core::Element;

/// Result type alias for spansort operations
pub type Result<T> = std::result::Result<T, SortError>;

/// Error type for spansort operations
#[derive(Error, Debug)]
pub enum SortError {
    /// A count parameter below the minimum of one
    #[error("invalid configuration: '{parameter}' must be at least 1 (got {value})")]
    InvalidConfig {
        /// The offending parameter name
        parameter: &'static str,
        /// The rejected value
        value: usize,
    },

    /// Two elements with no total order met inside a numeric bucket.
    ///
    /// The partitioner keeps numeric buckets homogeneous, so this firing
    /// means internal state is inconsistent; the whole sort call is
    /// aborted rather than returning a mis-sorted result.
    #[error("no total order between {left} and {right}")]
    Incomparable {
        /// Rendering of the left-hand element
        left: String,
        /// Rendering of the right-hand element
        right: String,
    },

    /// The worker pool could not be constructed
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

impl SortError {
    pub(crate) fn incomparable(left: &Element, right: &Element) -> Self {
        SortError::Incomparable {
            left: left.to_string(),
            right: right.to_string(),
        }
    }
}
