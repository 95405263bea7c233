/// Conversational agent errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChatError {
    #[error("invalid conversation corpus {source_name}: {reason}")]
    InvalidCorpus { source_name: String, reason: String },

    #[error("conversation corpus has no statement/response pairs")]
    EmptyCorpus,
}
