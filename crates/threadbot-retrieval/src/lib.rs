//! # threadbot-retrieval
//!
//! Finds the most similar previously answered thread within a topic partition.
//!
//! - [`PartitionIndex`]: tag → ordered thread records, loaded from
//!   `<folder>/<tag>.json` and memoized in a moka cache
//! - [`BruteForceSearch`]: exact Euclidean nearest neighbor, first wins ties
//! - [`ThreadRanker`]: question + tag → best thread

pub mod partition;
pub mod ranker;
pub mod search;

pub use partition::PartitionIndex;
pub use ranker::{RankedThread, ThreadRanker};
pub use search::BruteForceSearch;
