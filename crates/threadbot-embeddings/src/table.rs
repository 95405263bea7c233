//! Immutable token → vector table loaded from a tab-separated source.
//!
//! Each line is `token<TAB>v1<TAB>...<TAB>vN`. The dimension `N` is taken
//! from the first entry and every later entry must match it. Tokens are
//! stored exactly as written; normalization is the caller's job.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use threadbot_core::errors::{EmbeddingError, ThreadbotError, ThreadbotResult};
use tracing::{debug, info};

/// Word-embedding table. Rows live in one contiguous buffer.
#[derive(Debug, Clone)]
pub struct EmbeddingTable {
    rows: HashMap<String, usize>,
    values: Vec<f32>,
    dim: usize,
}

impl EmbeddingTable {
    /// Load a TSV embedding file.
    ///
    /// # Errors
    /// `ResourceUnavailable` when the file cannot be opened or read,
    /// `EmbeddingError` when a line is malformed or the file has no entries.
    pub fn load(path: impl AsRef<Path>) -> ThreadbotResult<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| ThreadbotError::resource_unavailable(path, e))?;
        let table = Self::from_reader(BufReader::new(file), &path.display().to_string())?;

        info!(
            path = %path.display(),
            tokens = table.len(),
            dim = table.dim(),
            "word embeddings loaded"
        );
        Ok(table)
    }

    /// Parse a TSV embedding source. `source_name` is used in errors and logs.
    pub fn from_reader<R: BufRead>(reader: R, source_name: &str) -> ThreadbotResult<Self> {
        let mut builder = TableBuilder::default();

        for (i, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|e| ThreadbotError::resource_unavailable(source_name, e))?;
            let line_no = i + 1;
            let line = std::str::from_utf8(&raw).map_err(|_| EmbeddingError::InvalidValue {
                line: line_no,
                value: String::from_utf8_lossy(&raw).trim().to_string(),
            })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut fields = line.split('\t');
            let token = fields.next().unwrap_or_default();
            let mut vector = Vec::with_capacity(builder.dim.unwrap_or(0));
            for field in fields {
                let field = field.trim();
                let value = field.parse::<f32>().map_err(|_| EmbeddingError::InvalidValue {
                    line: line_no,
                    value: field.to_string(),
                })?;
                vector.push(value);
            }

            builder.push(line_no, token, vector)?;
        }

        builder.finish(source_name)
    }

    /// Build a table from in-memory entries, with the same dimension checks
    /// as the file loader. Entry positions stand in for line numbers.
    pub fn from_entries<I, S>(entries: I) -> ThreadbotResult<Self>
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut builder = TableBuilder::default();
        for (i, (token, vector)) in entries.into_iter().enumerate() {
            let token: String = token.into();
            builder.push(i + 1, &token, vector)?;
        }
        builder.finish("entries")
    }

    /// Vector dimension shared by every entry.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no tokens. Never true for a loaded table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vector for `token`, if known.
    pub fn get(&self, token: &str) -> Option<&[f32]> {
        self.rows.get(token).map(|&row| {
            let start = row * self.dim;
            &self.values[start..start + self.dim]
        })
    }
}

/// Accumulates rows while enforcing the shared dimension.
#[derive(Default)]
struct TableBuilder {
    rows: HashMap<String, usize>,
    values: Vec<f32>,
    dim: Option<usize>,
}

impl TableBuilder {
    fn push(&mut self, line: usize, token: &str, vector: Vec<f32>) -> Result<(), EmbeddingError> {
        if vector.is_empty() {
            return Err(EmbeddingError::MissingValues {
                line,
                token: token.to_string(),
            });
        }

        let dim = *self.dim.get_or_insert(vector.len());
        if vector.len() != dim {
            return Err(EmbeddingError::InconsistentDimension {
                line,
                expected: dim,
                actual: vector.len(),
            });
        }

        match self.rows.get(token) {
            Some(&row) => {
                // Later lines win.
                debug!(token, line, "duplicate embedding token replaced");
                self.values[row * dim..(row + 1) * dim].copy_from_slice(&vector);
            }
            None => {
                self.rows.insert(token.to_string(), self.rows.len());
                self.values.extend_from_slice(&vector);
            }
        }
        Ok(())
    }

    fn finish(self, source_name: &str) -> ThreadbotResult<EmbeddingTable> {
        let Some(dim) = self.dim else {
            return Err(EmbeddingError::Empty {
                source_name: source_name.to_string(),
            }
            .into());
        };
        Ok(EmbeddingTable {
            rows: self.rows,
            values: self.values,
            dim,
        })
    }
}
