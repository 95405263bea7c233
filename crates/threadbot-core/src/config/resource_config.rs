use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::defaults;

/// Locations of every resource the router loads at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    /// Serialized intent classifier parameters.
    pub intent_model_path: PathBuf,
    /// Serialized tag classifier parameters.
    pub tag_model_path: PathBuf,
    /// Serialized TF-IDF vectorizer parameters.
    pub vectorizer_path: PathBuf,
    /// Tab-separated word embedding table.
    pub word_embeddings_path: PathBuf,
    /// Folder holding one `<tag>.json` thread partition per tag.
    pub thread_embeddings_folder: PathBuf,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            intent_model_path: PathBuf::from(defaults::DEFAULT_INTENT_MODEL_PATH),
            tag_model_path: PathBuf::from(defaults::DEFAULT_TAG_MODEL_PATH),
            vectorizer_path: PathBuf::from(defaults::DEFAULT_VECTORIZER_PATH),
            word_embeddings_path: PathBuf::from(defaults::DEFAULT_WORD_EMBEDDINGS_PATH),
            thread_embeddings_folder: PathBuf::from(defaults::DEFAULT_THREAD_EMBEDDINGS_FOLDER),
        }
    }
}

impl ResourceConfig {
    /// Resolve every relative path against `base`. Absolute paths are kept.
    pub fn resolve_against(&mut self, base: &Path) {
        for path in [
            &mut self.intent_model_path,
            &mut self.tag_model_path,
            &mut self.vectorizer_path,
            &mut self.word_embeddings_path,
            &mut self.thread_embeddings_folder,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
