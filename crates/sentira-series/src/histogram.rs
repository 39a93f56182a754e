//! Labeled sentiment histograms
//!
//! A histogram is an ordered label header plus a sequence of data points
//! whose values align positionally to those labels. "Histogram" here is
//! the dashboard sense of the word (a labeled multi-series time sequence),
//! not a statistical bucket histogram.

use crate::error::{IndexAxis, IndexError, ValidationError};
use crate::point::SentimentPoint;
use crate::timestamp::Timestamp;

/// Canonical dashboard label set
pub const STANDARD_LABELS: [&str; 3] = ["positive", "neutral", "negative"];

/// Ordered label header
///
/// Defines both the meaning and the required arity of every point's
/// values. Label order is preserved exactly as given.
///
/// # Invariants
/// - At least one label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramHeader {
    labels: Vec<String>,
}

impl HistogramHeader {
    /// Create header from labels
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyLabels`] when no labels are given
    pub fn new<I, S>(labels: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ValidationError::EmptyLabels);
        }
        Ok(Self { labels })
    }

    /// Canonical positive/neutral/negative header
    #[must_use]
    pub fn standard() -> Self {
        Self {
            labels: STANDARD_LABELS.iter().map(|label| label.to_string()).collect(),
        }
    }

    /// Labels in declared order
    #[inline]
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of labels (the required point arity)
    #[inline]
    #[must_use]
    pub fn arity(&self) -> usize {
        self.labels.len()
    }

    /// Position of a label by name
    #[inline]
    #[must_use]
    pub fn position(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|candidate| candidate == label)
    }
}

impl Default for HistogramHeader {
    fn default() -> Self {
        Self::standard()
    }
}

/// Labeled multi-series time sequence
///
/// # Invariants
/// - Every point carries exactly `header.arity()` values
/// - Immutable after construction
///
/// Point order is kept as supplied; ascending timestamps are recommended
/// but not required of input. [`SentimentHistogram::sorted_by_time`]
/// presents an ordered view without touching the stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentHistogram {
    header: HistogramHeader,
    data: Vec<SentimentPoint>,
}

impl SentimentHistogram {
    /// Create histogram, checking every point against the header arity
    ///
    /// # Errors
    /// Returns [`ValidationError::ArityMismatch`] naming the first
    /// offending point
    pub fn new(
        header: HistogramHeader,
        data: Vec<SentimentPoint>,
    ) -> Result<Self, ValidationError> {
        let expected = header.arity();
        for (point_index, point) in data.iter().enumerate() {
            if point.arity() != expected {
                return Err(ValidationError::ArityMismatch {
                    point_index,
                    expected,
                    actual: point.arity(),
                });
            }
        }
        Ok(Self { header, data })
    }

    /// Histogram with no points
    #[inline]
    #[must_use]
    pub fn empty(header: HistogramHeader) -> Self {
        Self {
            header,
            data: Vec::new(),
        }
    }

    /// Label header
    #[inline]
    #[must_use]
    pub fn header(&self) -> &HistogramHeader {
        &self.header
    }

    /// Points in stored order
    #[inline]
    #[must_use]
    pub fn data(&self) -> &[SentimentPoint] {
        &self.data
    }

    /// Number of points
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the histogram has no points
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Value at a point/label position
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfRange`] naming the offending axis
    pub fn value_at(&self, point_index: usize, label_index: usize) -> Result<f64, IndexError> {
        let point = self.data.get(point_index).ok_or(IndexError::OutOfRange {
            axis: IndexAxis::Point,
            index: point_index,
            bound: self.data.len(),
        })?;
        point.value(label_index).ok_or(IndexError::OutOfRange {
            axis: IndexAxis::Label,
            index: label_index,
            bound: self.header.arity(),
        })
    }

    /// Ascending-by-timestamp view of the points
    ///
    /// Stable on equal timestamps. Each call starts a fresh pass; the
    /// stored order is never modified.
    #[must_use]
    pub fn sorted_by_time(&self) -> SortedByTime<'_> {
        let mut order: Vec<usize> = (0..self.data.len()).collect();
        order.sort_by_key(|&index| self.data[index].timestamp());
        SortedByTime {
            data: &self.data,
            order,
            next: 0,
        }
    }

    /// Copy with points in ascending timestamp order
    #[must_use]
    pub fn to_sorted(&self) -> Self {
        Self {
            header: self.header.clone(),
            data: self.sorted_by_time().cloned().collect(),
        }
    }

    /// Time series of one label column, in stored order
    ///
    /// # Errors
    /// Returns [`IndexError::OutOfRange`] when the label index exceeds the
    /// header arity
    pub fn series(
        &self,
        label_index: usize,
    ) -> Result<impl Iterator<Item = (Timestamp, f64)> + '_, IndexError> {
        if label_index >= self.header.arity() {
            return Err(IndexError::OutOfRange {
                axis: IndexAxis::Label,
                index: label_index,
                bound: self.header.arity(),
            });
        }
        Ok(self
            .data
            .iter()
            .map(move |point| (point.timestamp(), point.values()[label_index])))
    }

    /// Earliest and latest instants over the points
    #[must_use]
    pub fn time_span(&self) -> Option<(Timestamp, Timestamp)> {
        let min = self.data.iter().map(SentimentPoint::timestamp).min()?;
        let max = self.data.iter().map(SentimentPoint::timestamp).max()?;
        Some((min, max))
    }

    /// Whether the stored order is already ascending by timestamp
    #[must_use]
    pub fn is_time_ordered(&self) -> bool {
        self.data
            .windows(2)
            .all(|pair| pair[0].timestamp() <= pair[1].timestamp())
    }

    /// Most recent point by timestamp
    ///
    /// Equal timestamps resolve to the later stored point.
    #[must_use]
    pub fn latest(&self) -> Option<&SentimentPoint> {
        self.data.iter().max_by_key(|point| point.timestamp())
    }
}

/// Ascending timestamp view produced by [`SentimentHistogram::sorted_by_time`]
///
/// Yields points lazily through a precomputed index permutation. Equal
/// timestamps keep their stored relative order.
#[derive(Debug, Clone)]
pub struct SortedByTime<'a> {
    data: &'a [SentimentPoint],
    order: Vec<usize>,
    next: usize,
}

impl<'a> Iterator for SortedByTime<'a> {
    type Item = &'a SentimentPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let index = *self.order.get(self.next)?;
        self.next += 1;
        Some(&self.data[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.order.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SortedByTime<'_> {}

/// Builder for assembling histograms point by point
///
/// Collects samples first and validates once at [`HistogramBuilder::build`].
/// When no header is set, the standard labels apply.
#[derive(Debug)]
pub struct HistogramBuilder {
    header: Option<HistogramHeader>,
    data: Vec<SentimentPoint>,
}

impl HistogramBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            header: None,
            data: Vec::new(),
        }
    }

    /// Set header
    #[inline]
    #[must_use]
    pub fn header(mut self, header: HistogramHeader) -> Self {
        self.header = Some(header);
        self
    }

    /// Append one sample
    #[inline]
    #[must_use]
    pub fn point(mut self, timestamp: Timestamp, values: impl IntoIterator<Item = f64>) -> Self {
        self.data.push(SentimentPoint::new(timestamp, values));
        self
    }

    /// Append prebuilt samples
    #[inline]
    #[must_use]
    pub fn points(mut self, points: impl IntoIterator<Item = SentimentPoint>) -> Self {
        self.data.extend(points);
        self
    }

    /// Build, validating the collected points against the header
    ///
    /// # Errors
    /// Returns [`ValidationError::ArityMismatch`] when any collected point
    /// disagrees with the header arity
    pub fn build(self) -> Result<SentimentHistogram, ValidationError> {
        let header = self.header.unwrap_or_default();
        SentimentHistogram::new(header, self.data)
    }
}

impl Default for HistogramBuilder {
    fn default() -> Self {
        Self::new()
    }
}
