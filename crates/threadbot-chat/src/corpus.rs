//! Conversation corpora in ChatterBot YAML layout:
//!
//! ```yaml
//! categories:
//! - greetings
//! conversations:
//! - - Hello
//!   - Hi
//! ```
//!
//! Within a conversation every line after the first answers the line
//! before it.

use std::path::Path;

use serde::Deserialize;
use threadbot_core::errors::{ChatError, ThreadbotError, ThreadbotResult};
use tracing::{debug, info};

const BUILTIN: &[(&str, &str)] = &[
    ("builtin:greetings", include_str!("../corpus/greetings.yml")),
    (
        "builtin:conversations",
        include_str!("../corpus/conversations.yml"),
    ),
];

#[derive(Debug, Deserialize)]
struct CorpusFile {
    #[serde(default)]
    categories: Vec<String>,
    #[serde(default)]
    conversations: Vec<Vec<String>>,
}

/// One known statement and the reply that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementPair {
    pub statement: String,
    pub response: String,
}

/// Ordered statement/response pairs, in corpus order.
#[derive(Debug, Clone, Default)]
pub struct ConversationCorpus {
    pairs: Vec<StatementPair>,
    categories: Vec<String>,
}

impl ConversationCorpus {
    /// The English corpus compiled into the binary.
    pub fn builtin() -> ThreadbotResult<Self> {
        let mut corpus = Self::default();
        for (name, src) in BUILTIN {
            corpus.extend_from_yaml(src, name)?;
        }
        Ok(corpus)
    }

    /// Load a YAML corpus file, or every `.yml`/`.yaml` file in a directory
    /// (sorted by file name).
    pub fn load(path: impl AsRef<Path>) -> ThreadbotResult<Self> {
        let path = path.as_ref();
        let mut corpus = Self::default();

        if path.is_dir() {
            let entries = std::fs::read_dir(path)
                .map_err(|e| ThreadbotError::resource_unavailable(path, e))?;
            let mut files = Vec::new();
            for entry in entries {
                let file = entry
                    .map_err(|e| ThreadbotError::resource_unavailable(path, e))?
                    .path();
                let is_yaml = matches!(
                    file.extension().and_then(|ext| ext.to_str()),
                    Some("yml" | "yaml")
                );
                if is_yaml && file.is_file() {
                    files.push(file);
                }
            }
            files.sort();
            for file in files {
                corpus.extend_from_file(&file)?;
            }
        } else {
            corpus.extend_from_file(path)?;
        }

        info!(
            path = %path.display(),
            pairs = corpus.len(),
            categories = corpus.categories.len(),
            "conversation corpus loaded"
        );
        Ok(corpus)
    }

    /// Parse one YAML document. `source_name` labels errors.
    pub fn from_yaml_str(src: &str, source_name: &str) -> ThreadbotResult<Self> {
        let mut corpus = Self::default();
        corpus.extend_from_yaml(src, source_name)?;
        Ok(corpus)
    }

    fn extend_from_file(&mut self, path: &Path) -> ThreadbotResult<()> {
        let src = std::fs::read_to_string(path)
            .map_err(|e| ThreadbotError::resource_unavailable(path, e))?;
        self.extend_from_yaml(&src, &path.display().to_string())
    }

    fn extend_from_yaml(&mut self, src: &str, source_name: &str) -> ThreadbotResult<()> {
        let file: CorpusFile = serde_yaml::from_str(src).map_err(|e| ChatError::InvalidCorpus {
            source_name: source_name.to_string(),
            reason: e.to_string(),
        })?;

        let before = self.pairs.len();
        for conversation in &file.conversations {
            for turn in conversation.windows(2) {
                self.pairs.push(StatementPair {
                    statement: turn[0].clone(),
                    response: turn[1].clone(),
                });
            }
        }
        for category in file.categories {
            if !self.categories.contains(&category) {
                self.categories.push(category);
            }
        }
        debug!(source = source_name, pairs = self.pairs.len() - before, "corpus parsed");
        Ok(())
    }

    pub fn pairs(&self) -> &[StatementPair] {
        &self.pairs
    }

    /// Distinct category names, in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
