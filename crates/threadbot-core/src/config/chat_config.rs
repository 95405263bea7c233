use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Conversational agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// YAML corpus file, or a directory of `.yml`/`.yaml` corpus files.
    /// The built-in English corpus is used when unset.
    pub corpus_path: Option<PathBuf>,
    /// Reply used when no known statement is similar enough.
    pub default_response: String,
    /// Minimum similarity (0.0–1.0) for a corpus match to be used.
    pub min_confidence: f64,
    /// Build the agent at startup instead of on the first small-talk query.
    pub eager_init: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            corpus_path: None,
            default_response: defaults::DEFAULT_CHAT_RESPONSE.to_string(),
            min_confidence: defaults::DEFAULT_CHAT_MIN_CONFIDENCE,
            eager_init: defaults::DEFAULT_CHAT_EAGER_INIT,
        }
    }
}
