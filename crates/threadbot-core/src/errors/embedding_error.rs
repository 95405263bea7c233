/// Word-embedding table load errors.
///
/// Every variant is a structural defect in the source (a malformed
/// embedding resource); none of them is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EmbeddingError {
    #[error("malformed embedding at line {line}: token {token:?} has no values")]
    MissingValues { line: usize, token: String },

    #[error("malformed embedding at line {line}: {value:?} is not a float")]
    InvalidValue { line: usize, value: String },

    #[error("malformed embedding at line {line}: expected {expected} values, got {actual}")]
    InconsistentDimension {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("malformed embedding source {source_name}: no entries")]
    Empty { source_name: String },
}
