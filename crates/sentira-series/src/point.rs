//! Individual sentiment samples

use crate::timestamp::Timestamp;
use smallvec::SmallVec;

/// Inline storage for point values
///
/// Up to four labels stay inline before spilling to the heap.
type ValueVec = SmallVec<[f64; 4]>;

/// One sentiment sample
///
/// `values` aligns positionally to the owning header's labels; the owning
/// histogram enforces the arity at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentPoint {
    timestamp: Timestamp,
    values: ValueVec,
}

impl SentimentPoint {
    /// Create a sample
    #[inline]
    #[must_use]
    pub fn new(timestamp: Timestamp, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            timestamp,
            values: values.into_iter().collect(),
        }
    }

    /// Sample instant
    #[inline]
    #[must_use]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Values in label order
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of values
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.values.len()
    }

    /// Value at one label position
    #[inline]
    #[must_use]
    pub fn value(&self, label_index: usize) -> Option<f64> {
        self.values.get(label_index).copied()
    }
}
