//! Sentira Series
//!
//! Validated, immutable sentiment time-series model.
//!
//! # Core Concepts
//!
//! - **Topic snapshot**: [`SentimentTopic`] binds a topic to one owned
//!   histogram plus refresh and request provenance
//! - **Histogram**: [`SentimentHistogram`] pairs an ordered label header
//!   with points whose values align positionally to those labels
//! - **Validation at the boundary**: constructors check label presence and
//!   point arity once; every held value is structurally sound
//! - **Wire compatibility**: snapshots encode to the legacy dashboard JSON
//!   shape, and decoding re-validates through the same constructors
//!
//! # Example
//!
//! ```rust,ignore
//! use sentira_series::prelude::*;
//!
//! let topic = SentimentTopic::from_parts(
//!     TopicId::new("rust"),
//!     "Rust",
//!     ["positive", "neutral", "negative"],
//!     vec![SentimentPoint::new(Timestamp::from_millis(1_000), [0.7, 0.2, 0.1])],
//!     Timestamp::from_millis(1_000),
//!     RequestId::new("req-1"),
//! )?;
//!
//! assert_eq!(topic.label_count(), 3);
//! assert_eq!(topic.value_at(0, 0)?, 0.7);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
mod error;
mod histogram;
mod ids;
mod point;
mod timestamp;
mod topic;
mod wire;

// Re-exports
pub use error::{IndexAxis, IndexError, ValidationError};
pub use histogram::{
    HistogramBuilder, HistogramHeader, SentimentHistogram, SortedByTime, STANDARD_LABELS,
};
pub use ids::{RecordId, RequestId, TopicId};
pub use point::SentimentPoint;
pub use timestamp::Timestamp;
pub use topic::SentimentTopic;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for model construction and reads
    pub use crate::histogram::{HistogramBuilder, HistogramHeader, SentimentHistogram};
    pub use crate::ids::{RequestId, TopicId};
    pub use crate::point::SentimentPoint;
    pub use crate::timestamp::Timestamp;
    pub use crate::topic::SentimentTopic;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
