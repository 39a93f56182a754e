//! Store configuration

use serde::{Deserialize, Serialize};

/// Topic store configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Maximum number of distinct topics, unbounded when `None`
    pub max_topics: Option<usize>,
}

impl StoreConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With a cap on distinct topics
    #[inline]
    #[must_use]
    pub fn with_max_topics(mut self, max: usize) -> Self {
        self.max_topics = Some(max);
        self
    }
}
