use std::sync::Arc;

use crate::errors::ThreadbotResult;
use crate::models::ThreadRecord;

/// Source of per-tag thread partitions.
pub trait IPartitionIndex: Send + Sync {
    /// All threads belonging to `tag`, in the order of the backing resource.
    fn threads_for_tag(&self, tag: &str) -> ThreadbotResult<Arc<[ThreadRecord]>>;

    /// Tags that have a backing resource.
    fn available_tags(&self) -> ThreadbotResult<Vec<String>>;
}
