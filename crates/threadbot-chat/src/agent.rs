//! Retrieval-style small talk: reply with the response of the most similar
//! known statement.

use std::collections::HashSet;

use threadbot_core::config::ChatConfig;
use threadbot_core::errors::{ChatError, ThreadbotResult};
use threadbot_core::traits::IConversationalAgent;
use tracing::debug;

use crate::corpus::ConversationCorpus;

#[derive(Debug)]
struct KnownStatement {
    normalized: String,
    words: HashSet<String>,
    response: String,
}

/// Corpus-backed conversational agent. Immutable after construction.
#[derive(Debug)]
pub struct CorpusChatAgent {
    statements: Vec<KnownStatement>,
    default_response: String,
    min_confidence: f64,
}

impl CorpusChatAgent {
    /// Index every statement of `corpus`. Statements with no words after
    /// normalization are skipped.
    ///
    /// # Errors
    /// `ChatError::EmptyCorpus` when nothing usable remains.
    pub fn new(corpus: &ConversationCorpus, config: &ChatConfig) -> ThreadbotResult<Self> {
        let statements: Vec<KnownStatement> = corpus
            .pairs()
            .iter()
            .filter_map(|pair| {
                let normalized = normalize_utterance(&pair.statement);
                if normalized.is_empty() {
                    return None;
                }
                Some(KnownStatement {
                    words: word_set(&normalized),
                    normalized,
                    response: pair.response.clone(),
                })
            })
            .collect();

        if statements.is_empty() {
            return Err(ChatError::EmptyCorpus.into());
        }

        Ok(Self {
            statements,
            default_response: config.default_response.clone(),
            min_confidence: config.min_confidence,
        })
    }

    /// Number of indexed statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Best (confidence, response) for `raw_text`, ignoring `min_confidence`.
    /// The first statement wins among equal scores.
    pub fn best_match(&self, raw_text: &str) -> Option<(f64, &str)> {
        let normalized = normalize_utterance(raw_text);
        if normalized.is_empty() {
            return None;
        }
        let words = word_set(&normalized);

        let mut best: Option<(f64, &KnownStatement)> = None;
        for known in &self.statements {
            let score = if known.normalized == normalized {
                1.0
            } else {
                jaccard(&words, &known.words)
            };
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, known));
            }
        }
        best.map(|(score, known)| (score, known.response.as_str()))
    }
}

impl IConversationalAgent for CorpusChatAgent {
    fn respond(&self, raw_text: &str) -> ThreadbotResult<String> {
        let reply = match self.best_match(raw_text) {
            Some((confidence, response)) if confidence >= self.min_confidence => {
                debug!(confidence, "corpus statement matched");
                response.to_string()
            }
            best => {
                debug!(
                    confidence = best.map_or(0.0, |(c, _)| c),
                    "no confident corpus match"
                );
                self.default_response.clone()
            }
        };
        Ok(reply)
    }

    fn name(&self) -> &str {
        "corpus"
    }
}

/// Lower-case; keep alphanumerics and whitespace; collapse whitespace.
pub fn normalize_utterance(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn word_set(normalized: &str) -> HashSet<String> {
    normalized.split(' ').map(str::to_string).collect()
}

fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}
