//! JSON parameter file loading shared by the vectorizer and the predictors.

use std::path::Path;

use serde::de::DeserializeOwned;
use threadbot_core::errors::{ModelError, ThreadbotError, ThreadbotResult};

/// Read and deserialize a parameter file.
///
/// # Errors
/// `ResourceUnavailable` when the file cannot be read; `ModelError` naming
/// `model` when the JSON does not match the expected shape.
pub fn read_params<T: DeserializeOwned>(path: &Path, model: &str) -> ThreadbotResult<T> {
    let text =
        std::fs::read_to_string(path).map_err(|e| ThreadbotError::resource_unavailable(path, e))?;
    serde_json::from_str(&text)
        .map_err(|e| invalid(model, format!("{}: {e}", path.display())))
}

/// Shorthand for an `InvalidParameters` error.
pub(crate) fn invalid(model: &str, reason: impl Into<String>) -> ThreadbotError {
    ModelError::InvalidParameters {
        model: model.to_string(),
        reason: reason.into(),
    }
    .into()
}
