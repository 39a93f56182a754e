//! Per-topic sentiment snapshots
//!
//! A [`SentimentTopic`] is the unit the rest of the system passes around:
//! one topic, one validated histogram, one request provenance tag. The
//! snapshot is immutable; updates produce a replacement via
//! [`SentimentTopic::merge_update`].

use crate::error::{IndexError, ValidationError};
use crate::histogram::{HistogramHeader, SentimentHistogram, SortedByTime};
use crate::ids::{RecordId, RequestId, TopicId};
use crate::point::SentimentPoint;
use crate::timestamp::Timestamp;

/// Immutable snapshot of one topic's sentiment history
///
/// # Invariants
/// - The histogram satisfies its header arity (checked at construction)
/// - All fields are fixed after construction; the histogram is owned by
///   exactly this snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentTopic {
    id: RecordId,
    topic_id: TopicId,
    topic_name: String,
    last_updated: Timestamp,
    histogram: SentimentHistogram,
    request_id: RequestId,
}

impl SentimentTopic {
    /// Create snapshot around an already-validated histogram
    ///
    /// Assigns a fresh record identity.
    #[must_use]
    pub fn new(
        topic_id: TopicId,
        topic_name: impl Into<String>,
        histogram: SentimentHistogram,
        last_updated: Timestamp,
        request_id: RequestId,
    ) -> Self {
        Self {
            id: RecordId::new(),
            topic_id,
            topic_name: topic_name.into(),
            last_updated,
            histogram,
            request_id,
        }
    }

    /// Create snapshot from raw labels and points, validating both
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyLabels`] when no labels are given,
    /// or [`ValidationError::ArityMismatch`] when any point disagrees with
    /// the label count
    pub fn from_parts<I, S>(
        topic_id: TopicId,
        topic_name: impl Into<String>,
        labels: I,
        points: Vec<SentimentPoint>,
        last_updated: Timestamp,
        request_id: RequestId,
    ) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let header = HistogramHeader::new(labels)?;
        let histogram = SentimentHistogram::new(header, points)?;
        Ok(Self::new(
            topic_id,
            topic_name,
            histogram,
            last_updated,
            request_id,
        ))
    }

    /// Rebuild a snapshot that already has an identity (wire decoding)
    pub(crate) fn with_id(
        id: RecordId,
        topic_id: TopicId,
        topic_name: String,
        last_updated: Timestamp,
        histogram: SentimentHistogram,
        request_id: RequestId,
    ) -> Self {
        Self {
            id,
            topic_id,
            topic_name,
            last_updated,
            histogram,
            request_id,
        }
    }

    /// Record identity
    #[inline]
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Topic key
    #[inline]
    #[must_use]
    pub fn topic_id(&self) -> &TopicId {
        &self.topic_id
    }

    /// Human-readable topic name
    #[inline]
    #[must_use]
    pub fn topic_name(&self) -> &str {
        &self.topic_name
    }

    /// Instant of the last refresh
    #[inline]
    #[must_use]
    pub fn last_updated(&self) -> Timestamp {
        self.last_updated
    }

    /// Sentiment history
    #[inline]
    #[must_use]
    pub fn histogram(&self) -> &SentimentHistogram {
        &self.histogram
    }

    /// Request that produced this snapshot
    #[inline]
    #[must_use]
    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    /// Number of labels every point carries
    #[inline]
    #[must_use]
    pub fn label_count(&self) -> usize {
        self.histogram.header().arity()
    }

    /// Value at a point/label position
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfRange`] naming the offending axis
    pub fn value_at(&self, point_index: usize, label_index: usize) -> Result<f64, IndexError> {
        self.histogram.value_at(point_index, label_index)
    }

    /// Ascending-by-timestamp view of the histogram points
    #[must_use]
    pub fn sorted_by_time(&self) -> SortedByTime<'_> {
        self.histogram.sorted_by_time()
    }

    /// Replacement snapshot carrying a wholly new histogram
    ///
    /// Keeps the record identity, topic key, and topic name. The existing
    /// snapshot is left untouched; readers holding it continue to see the
    /// old history.
    #[must_use]
    pub fn merge_update(
        &self,
        histogram: SentimentHistogram,
        last_updated: Timestamp,
        request_id: RequestId,
    ) -> Self {
        Self {
            id: self.id,
            topic_id: self.topic_id.clone(),
            topic_name: self.topic_name.clone(),
            last_updated,
            histogram,
            request_id,
        }
    }
}
