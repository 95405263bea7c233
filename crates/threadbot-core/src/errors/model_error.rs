/// Classifier and vectorizer parameter errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("invalid {model} parameters: {reason}")]
    InvalidParameters { model: String, reason: String },

    #[error("feature mismatch: model expects {expected} features, got {actual}")]
    FeatureMismatch { expected: usize, actual: usize },
}
