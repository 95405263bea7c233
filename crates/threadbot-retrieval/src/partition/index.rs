//! Tag-keyed partition index backed by a folder of partition files.
//!
//! With caching on, each partition is read at most once; concurrent first
//! requests for the same tag share one load (moka `try_get_with`). With
//! caching off, every request re-reads the file.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

use moka::sync::Cache;
use threadbot_core::config::RetrievalConfig;
use threadbot_core::constants::PARTITION_FILE_EXTENSION;
use threadbot_core::errors::{ThreadbotError, ThreadbotResult};
use threadbot_core::models::ThreadRecord;
use threadbot_core::traits::IPartitionIndex;
use tracing::{debug, info, warn};

use super::loader::{read_partition, LoadFailure};

/// Partition index over `<folder>/<tag>.json` files.
pub struct PartitionIndex {
    folder: PathBuf,
    dim: usize,
    cache: Option<Cache<String, Arc<[ThreadRecord]>>>,
}

impl PartitionIndex {
    /// Index over `folder`, expecting `dim`-dimensional thread vectors.
    pub fn new(folder: impl Into<PathBuf>, dim: usize, config: &RetrievalConfig) -> Self {
        let cache = config.cache_partitions.then(|| {
            Cache::builder()
                .max_capacity(config.partition_cache_capacity)
                .build()
        });
        Self {
            folder: folder.into(),
            dim,
            cache,
        }
    }

    /// Index that re-reads the partition file on every request.
    pub fn uncached(folder: impl Into<PathBuf>, dim: usize) -> Self {
        Self {
            folder: folder.into(),
            dim,
            cache: None,
        }
    }

    /// Expected thread vector dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Whether loaded partitions are kept in memory.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }

    /// Drop every cached partition. The next request for a tag re-reads it.
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
            debug!("partition cache cleared");
        }
    }

    fn load(&self, tag: &str) -> Result<Arc<[ThreadRecord]>, LoadFailure> {
        let records = read_partition(&self.folder, tag, self.dim)?;
        info!(
            tag,
            threads = records.len(),
            folder = %self.folder.display(),
            "thread partition loaded"
        );
        Ok(records.into())
    }
}

impl IPartitionIndex for PartitionIndex {
    fn threads_for_tag(&self, tag: &str) -> ThreadbotResult<Arc<[ThreadRecord]>> {
        let result = match &self.cache {
            Some(cache) => cache
                .try_get_with(tag.to_string(), || self.load(tag))
                .map_err(|shared| LoadFailure::clone(&shared)),
            None => self.load(tag),
        };
        result.map_err(|failure| {
            let err = ThreadbotError::from(failure);
            warn!(tag, error = %err, "thread partition unavailable");
            err
        })
    }

    fn available_tags(&self) -> ThreadbotResult<Vec<String>> {
        let entries = std::fs::read_dir(&self.folder)
            .map_err(|e| ThreadbotError::resource_unavailable(&self.folder, e))?;

        let mut tags = Vec::new();
        for entry in entries {
            let path = match entry {
                Ok(entry) => entry.path(),
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(ThreadbotError::resource_unavailable(&self.folder, e)),
            };
            if !path.is_file()
                || path.extension().and_then(|ext| ext.to_str()) != Some(PARTITION_FILE_EXTENSION)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                tags.push(stem.to_string());
            }
        }
        tags.sort();
        Ok(tags)
    }
}
