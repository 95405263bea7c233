use serde::{Deserialize, Serialize};

/// Sparse feature vector produced by a vectorizer and consumed by predictors.
///
/// `entries` holds `(column, weight)` pairs sorted by column with no
/// duplicates; every column is below `dim`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f32)>,
}

impl FeatureVector {
    /// Build from unsorted entries. Duplicate columns are summed and
    /// out-of-range columns are dropped.
    pub fn from_entries(dim: usize, mut entries: Vec<(usize, f32)>) -> Self {
        entries.retain(|(col, _)| *col < dim);
        entries.sort_by_key(|(col, _)| *col);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        Self { dim, entries }
    }

    /// An all-zero vector of the given width.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Total number of columns.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Non-zero `(column, weight)` pairs, sorted by column.
    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Weight at `column`, zero when absent.
    pub fn get(&self, column: usize) -> f32 {
        self.entries
            .binary_search_by_key(&column, |(col, _)| *col)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    /// Dot product with a dense row. Columns past the end of `row` count as zero.
    pub fn dot(&self, row: &[f32]) -> f64 {
        self.entries
            .iter()
            .filter_map(|(col, w)| row.get(*col).map(|r| f64::from(*w) * f64::from(*r)))
            .sum()
    }
}
