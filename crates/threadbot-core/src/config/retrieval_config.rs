use serde::{Deserialize, Serialize};

use super::defaults;

/// Retrieval subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Keep loaded partitions in memory instead of re-reading them per request.
    pub cache_partitions: bool,
    /// Maximum number of cached partitions (one per tag).
    pub partition_cache_capacity: u64,
    /// Final answer template with `{tag}` and `{thread_id}` placeholders.
    pub answer_template: String,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            cache_partitions: defaults::DEFAULT_CACHE_PARTITIONS,
            partition_cache_capacity: defaults::DEFAULT_PARTITION_CACHE_CAPACITY,
            answer_template: defaults::DEFAULT_ANSWER_TEMPLATE.to_string(),
        }
    }
}
