//! TF-IDF vectorizer over exported vocabulary and IDF weights.
//!
//! Tokens are the matches of `token_pattern` (group 1 when the pattern has a
//! capture group). N-grams are space-joined runs of consecutive tokens for
//! every `n` in `ngram_range`. Weight = tf × idf, with `1 + ln(tf)` in place
//! of tf when `sublinear_tf` is set, then optional row normalization.

use std::collections::HashMap;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};
use threadbot_core::errors::ThreadbotResult;
use threadbot_core::models::FeatureVector;
use threadbot_core::traits::IVectorizer;
use tracing::info;

use crate::loader::{invalid, read_params};

const MODEL_NAME: &str = "tfidf vectorizer";

/// Row normalization applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowNorm {
    L1,
    L2,
}

/// On-disk parameter layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfIdfParams {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<RowNorm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_lowercase() -> bool {
    true
}

fn default_token_pattern() -> String {
    r"(?u)\b\w\w+\b".to_string()
}

fn default_norm() -> Option<RowNorm> {
    Some(RowNorm::L2)
}

/// Fitted TF-IDF vectorizer.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    ngram_range: (usize, usize),
    lowercase: bool,
    token_pattern: Regex,
    sublinear_tf: bool,
    norm: Option<RowNorm>,
}

impl TfIdfVectorizer {
    /// Load and validate a parameter file.
    pub fn load(path: impl AsRef<Path>) -> ThreadbotResult<Self> {
        let path = path.as_ref();
        let params: TfIdfParams = read_params(path, MODEL_NAME)?;
        let vectorizer = Self::from_params(params)?;
        info!(
            path = %path.display(),
            vocabulary = vectorizer.vocabulary.len(),
            ngram_min = vectorizer.ngram_range.0,
            ngram_max = vectorizer.ngram_range.1,
            "tfidf vectorizer loaded"
        );
        Ok(vectorizer)
    }

    /// Validate parameters and compile the token pattern.
    pub fn from_params(params: TfIdfParams) -> ThreadbotResult<Self> {
        if params.idf.len() != params.vocabulary.len() {
            return Err(invalid(
                MODEL_NAME,
                format!(
                    "{} idf weights for {} vocabulary terms",
                    params.idf.len(),
                    params.vocabulary.len()
                ),
            ));
        }
        if let Some((term, col)) = params
            .vocabulary
            .iter()
            .find(|(_, col)| **col >= params.idf.len())
        {
            return Err(invalid(
                MODEL_NAME,
                format!("term {term:?} maps to column {col}, beyond {}", params.idf.len()),
            ));
        }
        let (min_n, max_n) = params.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(
                MODEL_NAME,
                format!("bad ngram range ({min_n}, {max_n})"),
            ));
        }
        if params.idf.iter().any(|w| !w.is_finite()) {
            return Err(invalid(MODEL_NAME, "non-finite idf weight"));
        }
        let token_pattern = Regex::new(&params.token_pattern)
            .map_err(|e| invalid(MODEL_NAME, format!("token pattern: {e}")))?;

        Ok(Self {
            vocabulary: params.vocabulary,
            idf: params.idf,
            ngram_range: params.ngram_range,
            lowercase: params.lowercase,
            token_pattern,
            sublinear_tf: params.sublinear_tf,
            norm: params.norm,
        })
    }

    /// Split text into tokens according to the token pattern.
    pub fn tokenize<'t>(&self, text: &'t str) -> Vec<&'t str> {
        if self.token_pattern.captures_len() > 1 {
            self.token_pattern
                .captures_iter(text)
                .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
                .collect()
        } else {
            self.token_pattern
                .find_iter(text)
                .map(|m| m.as_str())
                .collect()
        }
    }

    fn term_counts(&self, tokens: &[&str]) -> HashMap<usize, f32> {
        let mut counts: HashMap<usize, f32> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&col) = self.vocabulary.get(&term) {
                    *counts.entry(col).or_default() += 1.0;
                }
            }
        }
        counts
    }

    fn vectorize(&self, text: &str) -> FeatureVector {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            lowered.as_str()
        } else {
            text
        };

        let tokens = self.tokenize(text);
        let mut entries: Vec<(usize, f32)> = self
            .term_counts(&tokens)
            .into_iter()
            .map(|(col, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (col, tf * self.idf[col])
            })
            .collect();

        let norm = match self.norm {
            Some(RowNorm::L2) => entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt(),
            Some(RowNorm::L1) => entries.iter().map(|(_, w)| w.abs()).sum::<f32>(),
            None => 1.0,
        };
        if norm > f32::EPSILON {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }

        FeatureVector::from_entries(self.vocabulary.len(), entries)
    }
}

impl IVectorizer for TfIdfVectorizer {
    fn transform(&self, normalized_text: &str) -> ThreadbotResult<FeatureVector> {
        Ok(self.vectorize(normalized_text))
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threadbot_core::ThreadbotError;

    fn params(terms: &[(&str, usize)], idf: Vec<f32>) -> TfIdfParams {
        TfIdfParams {
            vocabulary: terms.iter().map(|(t, c)| (t.to_string(), *c)).collect(),
            idf,
            ngram_range: (1, 1),
            lowercase: true,
            token_pattern: r"(\S+)".to_string(),
            sublinear_tf: false,
            norm: None,
        }
    }

    #[test]
    fn raw_weights_are_tf_times_idf() {
        let v = TfIdfVectorizer::from_params(params(&[("sort", 0), ("list", 1)], vec![2.0, 3.0]))
            .unwrap();
        let f = v.transform("sort list sort python").unwrap();
        assert_eq!(f.dim(), 2);
        assert_eq!(f.entries(), &[(0, 4.0), (1, 3.0)]);
    }

    #[test]
    fn l2_norm_gives_unit_rows() {
        let mut p = params(&[("a", 0), ("b", 1)], vec![1.0, 1.0]);
        p.norm = Some(RowNorm::L2);
        let v = TfIdfVectorizer::from_params(p).unwrap();
        let f = v.transform("a b b b").unwrap();
        let norm: f32 = f.entries().iter().map(|(_, w)| w * w).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-6);
    }

    #[test]
    fn l1_norm_sums_to_one() {
        let mut p = params(&[("a", 0), ("b", 1)], vec![1.0, 3.0]);
        p.norm = Some(RowNorm::L1);
        let v = TfIdfVectorizer::from_params(p).unwrap();
        let f = v.transform("a b").unwrap();
        assert_eq!(f.entries(), &[(0, 0.25), (1, 0.75)]);
    }

    #[test]
    fn sublinear_tf_uses_log() {
        let mut p = params(&[("a", 0)], vec![1.0]);
        p.sublinear_tf = true;
        let v = TfIdfVectorizer::from_params(p).unwrap();
        let f = v.transform("a a a").unwrap();
        assert!((f.get(0) - (1.0 + 3.0f32.ln())).abs() < 1e-6);
    }

    #[test]
    fn bigrams_join_consecutive_tokens() {
        let mut p = params(&[("list", 0), ("sort list", 1)], vec![1.0, 1.0]);
        p.ngram_range = (1, 2);
        let v = TfIdfVectorizer::from_params(p).unwrap();
        let f = v.transform("sort list").unwrap();
        assert_eq!(f.entries(), &[(0, 1.0), (1, 1.0)]);
    }

    #[test]
    fn default_pattern_skips_single_characters() {
        let mut p = params(&[("go", 0), ("x", 1)], vec![1.0, 1.0]);
        p.token_pattern = default_token_pattern();
        let v = TfIdfVectorizer::from_params(p).unwrap();
        assert_eq!(v.tokenize("go x go"), vec!["go", "go"]);
    }

    #[test]
    fn capture_group_selects_token() {
        let v = TfIdfVectorizer::from_params(params(&[("c#", 0)], vec![1.0])).unwrap();
        assert_eq!(v.tokenize("c# c++"), vec!["c#", "c++"]);
    }

    #[test]
    fn lowercase_applies_before_lookup() {
        let v = TfIdfVectorizer::from_params(params(&[("rust", 0)], vec![1.0])).unwrap();
        assert_eq!(v.transform("RUST").unwrap().get(0), 1.0);
    }

    #[test]
    fn unknown_terms_give_empty_vector() {
        let v = TfIdfVectorizer::from_params(params(&[("rust", 0)], vec![1.0])).unwrap();
        let f = v.transform("cobol fortran").unwrap();
        assert_eq!(f.nnz(), 0);
        assert_eq!(f.dim(), 1);
    }

    #[test]
    fn idf_length_mismatch_is_rejected() {
        let err = TfIdfVectorizer::from_params(params(&[("a", 0), ("b", 1)], vec![1.0])).unwrap_err();
        assert!(matches!(err, ThreadbotError::ModelError(_)));
    }

    #[test]
    fn column_out_of_range_is_rejected() {
        let err = TfIdfVectorizer::from_params(params(&[("a", 0), ("b", 5)], vec![1.0, 1.0]))
            .unwrap_err();
        assert!(matches!(err, ThreadbotError::ModelError(_)));
    }

    #[test]
    fn bad_ngram_range_is_rejected() {
        let mut p = params(&[("a", 0)], vec![1.0]);
        p.ngram_range = (2, 1);
        assert!(TfIdfVectorizer::from_params(p).is_err());
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let json = r#"{"vocabulary": {"python": 0}, "idf": [1.5]}"#;
        let p: TfIdfParams = serde_json::from_str(json).unwrap();
        assert_eq!(p.ngram_range, (1, 1));
        assert!(p.lowercase);
        assert_eq!(p.norm, Some(RowNorm::L2));
        let explicit_null: TfIdfParams =
            serde_json::from_str(r#"{"vocabulary": {}, "idf": [], "norm": null}"#).unwrap();
        assert_eq!(explicit_null.norm, None);
    }
}
