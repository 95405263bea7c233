//! Error taxonomy. Subsystem errors convert into [`ThreadbotError`] via `From`.

mod chat_error;
mod embedding_error;
mod model_error;
mod partition_error;
mod retrieval_error;

use std::path::Path;

pub use chat_error::ChatError;
pub use embedding_error::EmbeddingError;
pub use model_error::ModelError;
pub use partition_error::PartitionError;
pub use retrieval_error::RetrievalError;

/// Result alias used across the workspace.
pub type ThreadbotResult<T> = Result<T, ThreadbotError>;

/// Umbrella error for every threadbot operation.
#[derive(Debug, thiserror::Error)]
pub enum ThreadbotError {
    #[error("resource unavailable: {path}: {reason}")]
    ResourceUnavailable { path: String, reason: String },

    #[error(transparent)]
    EmbeddingError(#[from] EmbeddingError),

    #[error(transparent)]
    PartitionError(#[from] PartitionError),

    #[error(transparent)]
    RetrievalError(#[from] RetrievalError),

    #[error(transparent)]
    ModelError(#[from] ModelError),

    #[error(transparent)]
    ChatError(#[from] ChatError),

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ThreadbotError {
    /// Build a `ResourceUnavailable` from a path and the underlying failure.
    pub fn resource_unavailable(path: impl AsRef<Path>, reason: impl std::fmt::Display) -> Self {
        Self::ResourceUnavailable {
            path: path.as_ref().display().to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for any unreadable resource, including a tag with no partition.
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(
            self,
            Self::ResourceUnavailable { .. } | Self::PartitionError(PartitionError::Unknown { .. })
        )
    }
}
