/// Nearest-neighbor search errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RetrievalError {
    #[error("empty candidate set: nothing to search")]
    EmptyCandidateSet,

    #[error("query dimension mismatch: candidates have {expected}, query has {actual}")]
    QueryDimensionMismatch { expected: usize, actual: usize },
}
