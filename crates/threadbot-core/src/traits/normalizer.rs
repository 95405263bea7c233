/// Text normalization applied before featurization and embedding lookup.
pub trait ITextNormalizer: Send + Sync {
    /// Tokenize, case-fold, strip disallowed symbols, and drop stopwords.
    fn normalize(&self, text: &str) -> String;
}
