//! # threadbot-classify
//!
//! The featurization half of the router:
//! - [`StopwordNormalizer`]: raw text → normalized text
//! - [`TfIdfVectorizer`]: normalized text → sparse TF-IDF features
//! - [`LinearPredictor`]: features → intent or tag label
//!
//! Vectorizer and predictor parameters are loaded from JSON files exported
//! by the training pipeline.

pub mod linear;
pub mod loader;
pub mod normalize;
pub mod stopwords;
pub mod tfidf;

pub use linear::LinearPredictor;
pub use normalize::StopwordNormalizer;
pub use tfidf::{RowNorm, TfIdfVectorizer};
