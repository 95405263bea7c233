//! Text normalization shared by featurization and embedding lookup.

use once_cell::sync::Lazy;
use regex::Regex;
use threadbot_core::traits::ITextNormalizer;

use crate::stopwords::is_stopword;

static REPLACE_BY_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[/(){}\[\]\|@,;]").unwrap());

static BAD_SYMBOLS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9a-z #+_]").unwrap());

/// Lower-case, turn separators into spaces, drop every character outside
/// `[0-9a-z #+_]`, then remove English stopwords.
///
/// `#` and `+` survive so tokens like `c#` and `c++` stay intact.
pub fn normalize_text(text: &str) -> String {
    let lower = text.to_lowercase();
    let spaced = REPLACE_BY_SPACE.replace_all(&lower, " ");
    let cleaned = BAD_SYMBOLS.replace_all(&spaced, "");

    cleaned
        .split_whitespace()
        .filter(|word| !is_stopword(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The default [`ITextNormalizer`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordNormalizer;

impl ITextNormalizer for StopwordNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalize_text(text)
    }
}
