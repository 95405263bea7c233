use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque thread identifier: an integer or a string, as stored in the
/// partition resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThreadId {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<u64> for ThreadId {
    fn from(id: u64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for ThreadId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

/// One previously answered thread, represented by its embedding vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub id: ThreadId,
    pub vector: Vec<f32>,
}

impl ThreadRecord {
    pub fn new(id: impl Into<ThreadId>, vector: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            vector,
        }
    }

    /// Dimension of the thread vector.
    pub fn dim(&self) -> usize {
        self.vector.len()
    }
}
