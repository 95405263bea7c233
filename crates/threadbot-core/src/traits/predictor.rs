use crate::errors::ThreadbotResult;
use crate::models::FeatureVector;

/// A trained classifier: feature vector in, raw label out.
pub trait IPredictor: Send + Sync {
    /// Predict the label for one feature vector.
    fn predict(&self, features: &FeatureVector) -> ThreadbotResult<String>;

    /// Every label this predictor can emit.
    fn labels(&self) -> &[String];
}
