//! Store error types

use sentira_series::TopicId;

/// Errors surfaced by [`TopicStore`](crate::TopicStore) operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// No snapshot has been published under the topic key
    #[error("unknown topic: {topic_id}")]
    UnknownTopic {
        /// Key that was looked up
        topic_id: TopicId,
    },

    /// The configured topic cap refuses another distinct topic
    #[error("topic capacity exhausted: limit is {max}")]
    CapacityExhausted {
        /// Configured maximum number of topics
        max: usize,
    },
}
