//! # threadbot-embeddings
//!
//! Word embeddings for retrieval:
//! - [`EmbeddingTable`]: token → fixed-dimension vector, loaded once from a TSV source
//! - [`VectorAverager`]: normalized text → mean of its known tokens' vectors
//! - [`distance`]: Euclidean distance helpers shared with nearest-neighbor search

pub mod averager;
pub mod distance;
pub mod table;

pub use averager::{AveragedVector, VectorAverager};
pub use distance::{euclidean_distance, squared_euclidean_distance};
pub use table::EmbeddingTable;
