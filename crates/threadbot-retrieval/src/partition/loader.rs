//! Reads one partition file: `<folder>/<tag>.json` holding parallel
//! `thread_ids` and `embeddings` arrays.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use threadbot_core::constants::PARTITION_FILE_EXTENSION;
use threadbot_core::errors::{PartitionError, ThreadbotError, ThreadbotResult};
use threadbot_core::models::{ThreadId, ThreadRecord};

/// On-disk partition layout. `thread_ids[i]` owns `embeddings[i]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartitionFile {
    pub thread_ids: Vec<ThreadId>,
    pub embeddings: Vec<Vec<f32>>,
}

impl PartitionFile {
    /// Pair ids with vectors, checking counts and the vector dimension.
    pub fn into_records(self, tag: &str, dim: usize) -> Result<Vec<ThreadRecord>, PartitionError> {
        if self.thread_ids.len() != self.embeddings.len() {
            return Err(corrupt(
                tag,
                format!(
                    "{} thread ids but {} vectors",
                    self.thread_ids.len(),
                    self.embeddings.len()
                ),
            ));
        }
        if let Some((i, v)) = self
            .embeddings
            .iter()
            .enumerate()
            .find(|(_, v)| v.len() != dim)
        {
            return Err(corrupt(
                tag,
                format!("vector {i} has {} values, expected {dim}", v.len()),
            ));
        }

        Ok(self
            .thread_ids
            .into_iter()
            .zip(self.embeddings)
            .map(|(id, vector)| ThreadRecord { id, vector })
            .collect())
    }
}

/// Cloneable load failure, so a single failed cache fill can be returned to
/// every waiting caller.
#[derive(Debug, Clone)]
pub(crate) enum LoadFailure {
    Partition(PartitionError),
    Unavailable { path: PathBuf, reason: String },
}

impl From<PartitionError> for LoadFailure {
    fn from(err: PartitionError) -> Self {
        Self::Partition(err)
    }
}

impl From<LoadFailure> for ThreadbotError {
    fn from(failure: LoadFailure) -> Self {
        match failure {
            LoadFailure::Partition(err) => err.into(),
            LoadFailure::Unavailable { path, reason } => {
                ThreadbotError::resource_unavailable(path, reason)
            }
        }
    }
}

/// File path for `tag`, or `None` if the tag cannot name a file in `folder`
/// (empty, `.`/`..`, or containing a path separator or NUL).
pub fn partition_path(folder: &Path, tag: &str) -> Option<PathBuf> {
    let unsafe_tag = tag.is_empty()
        || tag == "."
        || tag == ".."
        || tag.contains(['/', '\\', '\0']);
    if unsafe_tag {
        return None;
    }
    Some(folder.join(format!("{tag}.{PARTITION_FILE_EXTENSION}")))
}

/// Load and validate the partition for `tag`.
///
/// # Errors
/// - `PartitionError::Unknown` if no file exists for the tag
/// - `PartitionError::Corrupt` if the file is not a valid partition of
///   dimension `dim`
/// - `ResourceUnavailable` for any other read failure
pub fn load_partition(folder: &Path, tag: &str, dim: usize) -> ThreadbotResult<Vec<ThreadRecord>> {
    read_partition(folder, tag, dim).map_err(ThreadbotError::from)
}

pub(crate) fn read_partition(
    folder: &Path,
    tag: &str,
    dim: usize,
) -> Result<Vec<ThreadRecord>, LoadFailure> {
    let path = partition_path(folder, tag).ok_or_else(|| unknown(tag))?;
    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(unknown(tag).into()),
        Err(e) => {
            return Err(LoadFailure::Unavailable {
                path,
                reason: e.to_string(),
            })
        }
    };

    let file: PartitionFile =
        serde_json::from_slice(&bytes).map_err(|e| corrupt(tag, e.to_string()))?;
    Ok(file.into_records(tag, dim)?)
}

fn unknown(tag: &str) -> PartitionError {
    PartitionError::Unknown {
        tag: tag.to_string(),
    }
}

fn corrupt(tag: &str, reason: impl Into<String>) -> PartitionError {
    PartitionError::Corrupt {
        tag: tag.to_string(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn unsafe_tags_have_no_path() {
        let folder = Path::new("/data");
        for tag in ["", ".", "..", "../etc", "a/b", "a\\b", "nul\0"] {
            assert_eq!(partition_path(folder, tag), None, "{tag:?}");
        }
        assert_eq!(
            partition_path(folder, "c#"),
            Some(PathBuf::from("/data/c#.json"))
        );
    }

    #[test]
    fn loads_records_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "python.json",
            r#"{"thread_ids": [10, "x-2", 30], "embeddings": [[1, 0], [0, 1], [1, 1]]}"#,
        );
        let records = load_partition(dir.path(), "python", 2).unwrap();
        let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, ["10", "x-2", "30"]);
        assert_eq!(records[2].vector, vec![1.0, 1.0]);
    }

    #[test]
    fn missing_file_is_unknown_partition() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_partition(dir.path(), "cobol", 2).unwrap_err();
        assert!(matches!(
            err,
            ThreadbotError::PartitionError(PartitionError::Unknown { ref tag }) if tag == "cobol"
        ));
        assert!(err.is_resource_unavailable());
    }

    #[test]
    fn traversal_tag_is_unknown_partition() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_partition(dir.path(), "../secrets", 2).unwrap_err();
        assert!(matches!(
            err,
            ThreadbotError::PartitionError(PartitionError::Unknown { .. })
        ));
    }

    #[test]
    fn count_mismatch_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "java.json",
            r#"{"thread_ids": [1, 2], "embeddings": [[1, 0]]}"#,
        );
        let err = load_partition(dir.path(), "java", 2).unwrap_err();
        assert!(err.to_string().contains("2 thread ids but 1 vectors"));
    }

    #[test]
    fn wrong_dimension_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "java.json",
            r#"{"thread_ids": [1, 2], "embeddings": [[1, 0], [1, 0, 0]]}"#,
        );
        let err = load_partition(dir.path(), "java", 2).unwrap_err();
        assert!(matches!(
            err,
            ThreadbotError::PartitionError(PartitionError::Corrupt { ref reason, .. })
                if reason.contains("vector 1")
        ));
    }

    #[test]
    fn invalid_json_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "java.json", "not json");
        let err = load_partition(dir.path(), "java", 2).unwrap_err();
        assert!(matches!(
            err,
            ThreadbotError::PartitionError(PartitionError::Corrupt { .. })
        ));
    }

    #[test]
    fn empty_partition_loads() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "r.json", r#"{"thread_ids": [], "embeddings": []}"#);
        assert!(load_partition(dir.path(), "r", 2).unwrap().is_empty());
    }
}
