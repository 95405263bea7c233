/// Per-tag thread partition errors.
///
/// `Clone` so one failed load can be handed to every caller that was
/// waiting on the same cache entry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartitionError {
    #[error("unknown partition: no thread resource for tag {tag:?}")]
    Unknown { tag: String },

    #[error("corrupt partition {tag:?}: {reason}")]
    Corrupt { tag: String, reason: String },
}
