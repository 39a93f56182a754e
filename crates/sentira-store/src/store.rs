//! Concurrent snapshot registry
//!
//! One current snapshot per topic key. Snapshots are handed out as
//! `Arc`s; refreshing a topic swaps the slot to a replacement while
//! readers holding the old `Arc` keep the history they fetched.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use sentira_series::{RequestId, SentimentHistogram, SentimentTopic, Timestamp, TopicId};

use crate::config::StoreConfig;
use crate::error::StoreError;

/// Concurrent map of the current snapshot per topic
///
/// All operations take `&self`; shard locking lives inside [`DashMap`].
#[derive(Debug)]
pub struct TopicStore {
    topics: DashMap<TopicId, Arc<SentimentTopic>>,
    config: StoreConfig,
}

impl TopicStore {
    /// Create unbounded store
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(StoreConfig::new())
    }

    /// Create store with explicit configuration
    #[must_use]
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            topics: DashMap::new(),
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.config
    }

    /// Publish a snapshot, replacing any current one for the same topic
    ///
    /// Returns the prior snapshot when the topic was already present.
    ///
    /// # Errors
    /// Returns [`StoreError::CapacityExhausted`] when the topic is new and
    /// the configured cap is already reached
    pub fn publish(
        &self,
        topic: SentimentTopic,
    ) -> Result<Option<Arc<SentimentTopic>>, StoreError> {
        let topic_id = topic.topic_id().clone();
        // Read before taking the shard lock; racing first publishes may
        // overshoot the cap by the number of concurrent writers.
        let occupancy = self.topics.len();
        match self.topics.entry(topic_id.clone()) {
            Entry::Occupied(mut entry) => {
                let prior = entry.insert(Arc::new(topic));
                tracing::debug!("Replaced snapshot for topic {}", topic_id);
                Ok(Some(prior))
            }
            Entry::Vacant(entry) => {
                if let Some(max) = self.config.max_topics {
                    if occupancy >= max {
                        return Err(StoreError::CapacityExhausted { max });
                    }
                }
                entry.insert(Arc::new(topic));
                tracing::debug!("Published first snapshot for topic {}", topic_id);
                Ok(None)
            }
        }
    }

    /// Swap in a replacement histogram for a published topic
    ///
    /// The replacement snapshot is built through
    /// [`SentimentTopic::merge_update`] while the key's write lock is held,
    /// so concurrent refreshes of one topic serialize and none is lost.
    ///
    /// # Errors
    /// Returns [`StoreError::UnknownTopic`] when nothing has been published
    /// under the key
    pub fn refresh(
        &self,
        topic_id: &TopicId,
        histogram: SentimentHistogram,
        last_updated: Timestamp,
        request_id: RequestId,
    ) -> Result<Arc<SentimentTopic>, StoreError> {
        let mut entry = self
            .topics
            .get_mut(topic_id)
            .ok_or_else(|| StoreError::UnknownTopic {
                topic_id: topic_id.clone(),
            })?;
        let next = Arc::new(entry.merge_update(histogram, last_updated, request_id));
        *entry = Arc::clone(&next);
        tracing::info!("Refreshed topic {} at {}", topic_id, last_updated);
        Ok(next)
    }

    /// Current snapshot for a topic
    #[must_use]
    pub fn get(&self, topic_id: &TopicId) -> Option<Arc<SentimentTopic>> {
        self.topics
            .get(topic_id)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Whether a snapshot is published under the key
    #[must_use]
    pub fn contains(&self, topic_id: &TopicId) -> bool {
        self.topics.contains_key(topic_id)
    }

    /// Remove a topic, returning its final snapshot
    pub fn remove(&self, topic_id: &TopicId) -> Option<Arc<SentimentTopic>> {
        let removed = self.topics.remove(topic_id).map(|(_, snapshot)| snapshot);
        if removed.is_some() {
            tracing::debug!("Removed topic {}", topic_id);
        }
        removed
    }

    /// Keys of every published topic, in no particular order
    #[must_use]
    pub fn topic_ids(&self) -> Vec<TopicId> {
        self.topics
            .iter()
            .map(|entry| entry.key().clone())
            .collect()
    }

    /// Number of published topics
    #[must_use]
    pub fn len(&self) -> usize {
        self.topics.len()
    }

    /// Whether no topics are published
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

impl Default for TopicStore {
    fn default() -> Self {
        Self::new()
    }
}
