//! Text → single vector by averaging the embeddings of known tokens.

use std::sync::Arc;

use tracing::debug;

use crate::table::EmbeddingTable;

/// Result of averaging, with match statistics for logging.
#[derive(Debug, Clone, PartialEq)]
pub struct AveragedVector {
    /// Mean embedding; the zero vector when nothing matched.
    pub vector: Vec<f32>,
    /// Number of whitespace-separated tokens in the input.
    pub tokens: usize,
    /// Number of tokens found in the table.
    pub matched: usize,
}

impl AveragedVector {
    /// True when no token was in the vocabulary.
    pub fn is_out_of_vocabulary(&self) -> bool {
        self.matched == 0
    }
}

/// Converts normalized text into a vector of the table's dimension.
///
/// The input must already be normalized (see `ITextNormalizer`); tokens are
/// looked up exactly as they appear.
#[derive(Debug, Clone)]
pub struct VectorAverager {
    table: Arc<EmbeddingTable>,
}

impl VectorAverager {
    pub fn new(table: Arc<EmbeddingTable>) -> Self {
        Self { table }
    }

    /// Output dimension.
    pub fn dim(&self) -> usize {
        self.table.dim()
    }

    /// Mean embedding of the known tokens of `text`. Never fails; the result
    /// always has length `dim`.
    pub fn vectorize(&self, text: &str) -> Vec<f32> {
        self.vectorize_detailed(text).vector
    }

    /// Like [`vectorize`](Self::vectorize), with match counts.
    pub fn vectorize_detailed(&self, text: &str) -> AveragedVector {
        average_embedding(text, &self.table)
    }
}

/// Sum the vectors of every token of `text` present in `table`, divided by
/// the number of matches. Zero matches yields the zero vector.
pub fn average_embedding(text: &str, table: &EmbeddingTable) -> AveragedVector {
    let dim = table.dim();
    let mut sum = vec![0.0f64; dim];
    let mut tokens = 0;
    let mut matched = 0;

    for token in text.split_whitespace() {
        tokens += 1;
        if let Some(vector) = table.get(token) {
            for (acc, v) in sum.iter_mut().zip(vector) {
                *acc += f64::from(*v);
            }
            matched += 1;
        }
    }

    let vector = if matched == 0 {
        vec![0.0; dim]
    } else {
        let n = matched as f64;
        sum.into_iter().map(|acc| (acc / n) as f32).collect()
    };

    debug!(tokens, matched, dim, "text vectorized");
    AveragedVector {
        vector,
        tokens,
        matched,
    }
}
