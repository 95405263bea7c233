//! Capability interfaces at the seams between the router and its collaborators.

mod conversational;
mod neighbor_search;
mod normalizer;
mod partition_index;
mod predictor;
mod vectorizer;

pub use conversational::IConversationalAgent;
pub use neighbor_search::INeighborSearch;
pub use normalizer::ITextNormalizer;
pub use partition_index::IPartitionIndex;
pub use predictor::IPredictor;
pub use vectorizer::IVectorizer;
