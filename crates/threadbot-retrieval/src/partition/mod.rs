//! Per-tag thread partitions.

pub mod index;
pub mod loader;

pub use index::PartitionIndex;
pub use loader::{load_partition, partition_path, PartitionFile};
