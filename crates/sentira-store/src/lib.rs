//! Sentira Store
//!
//! Concurrent snapshot registry for sentiment topics.
//!
//! # Overview
//!
//! The store provides:
//! - **TopicStore**: One current snapshot per topic key, shared as `Arc`s
//! - **StoreConfig**: Optional cap on distinct topics
//! - **Swap-on-refresh**: Readers holding a snapshot keep it while the
//!   slot moves on to the replacement
//!
//! # Example
//!
//! ```rust
//! use sentira_series::{HistogramBuilder, RequestId, SentimentTopic, Timestamp, TopicId};
//! use sentira_store::TopicStore;
//!
//! let store = TopicStore::new();
//!
//! let histogram = HistogramBuilder::new()
//!     .point(Timestamp::from_millis(1_000), [0.7, 0.2, 0.1])
//!     .build()
//!     .unwrap();
//! let topic = SentimentTopic::new(
//!     TopicId::new("rust"),
//!     "Rust",
//!     histogram,
//!     Timestamp::from_millis(1_000),
//!     RequestId::new("req-1"),
//! );
//!
//! store.publish(topic).unwrap();
//! let snapshot = store.get(&TopicId::new("rust")).unwrap();
//! assert_eq!(snapshot.topic_name(), "Rust");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod store;

// Re-exports
pub use config::StoreConfig;
pub use error::StoreError;
pub use store::TopicStore;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for store operations
    pub use crate::{StoreConfig, StoreError, TopicStore};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
