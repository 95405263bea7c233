//! TOML configuration, constructed once at startup and passed into every
//! component constructor.

pub mod chat_config;
pub mod defaults;
pub mod observability_config;
pub mod resource_config;
pub mod retrieval_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use chat_config::ChatConfig;
pub use observability_config::ObservabilityConfig;
pub use resource_config::ResourceConfig;
pub use retrieval_config::RetrievalConfig;

use crate::errors::{ThreadbotError, ThreadbotResult};

/// Top-level configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadbotConfig {
    pub resources: ResourceConfig,
    pub retrieval: RetrievalConfig,
    pub chat: ChatConfig,
    pub observability: ObservabilityConfig,
}

impl ThreadbotConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load a TOML file. Relative resource paths (including the chat corpus)
    /// resolve against the directory containing the file.
    pub fn from_file(path: impl AsRef<Path>) -> ThreadbotResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ThreadbotError::resource_unavailable(path, e))?;
        let mut config = Self::from_toml(&text)
            .map_err(|e| ThreadbotError::ConfigError(format!("{}: {e}", path.display())))?;

        if let Some(base) = path.parent() {
            config.resources.resolve_against(base);
            if let Some(corpus) = config.chat.corpus_path.as_mut() {
                if corpus.is_relative() {
                    *corpus = base.join(&*corpus);
                }
            }
        }
        Ok(config)
    }
}
