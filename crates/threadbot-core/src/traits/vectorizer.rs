use crate::errors::ThreadbotResult;
use crate::models::FeatureVector;

/// Feature extraction over normalized text.
pub trait IVectorizer: Send + Sync {
    /// Transform one normalized text into a feature vector.
    fn transform(&self, normalized_text: &str) -> ThreadbotResult<FeatureVector>;

    /// Width of the produced feature vectors.
    fn dimensions(&self) -> usize;
}
