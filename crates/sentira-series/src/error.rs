//! Error taxonomy for the sentiment model
//!
//! Two error kinds cover the whole model surface:
//! - [`ValidationError`]: malformed input rejected at construction
//! - [`IndexError`]: out-of-range indexed reads
//!
//! All failures are immediate and deterministic; nothing here retries,
//! clamps, or substitutes defaults.

use std::fmt::{self, Display, Formatter};

/// Axis named by an out-of-range index error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexAxis {
    /// Index into a histogram's data points
    Point,

    /// Index into the header's labels
    Label,
}

impl Display for IndexAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Point => f.write_str("point"),
            Self::Label => f.write_str("label"),
        }
    }
}

/// Errors raised when constructing model values
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// A point's value count disagrees with the header arity
    #[error("arity mismatch at point {point_index}: expected {expected} values, got {actual}")]
    ArityMismatch {
        point_index: usize,
        expected: usize,
        actual: usize,
    },

    /// The header defines no labels
    #[error("histogram header defines no labels")]
    EmptyLabels,
}

/// Errors raised by indexed reads
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Index beyond the valid range of its axis
    #[error("{axis} index {index} out of range: bound is {bound}")]
    OutOfRange {
        axis: IndexAxis,
        index: usize,
        bound: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_mismatch_names_the_point() {
        let error = ValidationError::ArityMismatch {
            point_index: 2,
            expected: 3,
            actual: 1,
        };
        assert_eq!(
            error.to_string(),
            "arity mismatch at point 2: expected 3 values, got 1"
        );
    }

    #[test]
    fn index_error_names_the_axis() {
        let error = IndexError::OutOfRange {
            axis: IndexAxis::Label,
            index: 3,
            bound: 3,
        };
        assert_eq!(error.to_string(), "label index 3 out of range: bound is 3");
    }
}
