//! Exact nearest-neighbor search by Euclidean distance.

use threadbot_core::errors::{RetrievalError, ThreadbotResult};
use threadbot_core::models::{Neighbor, ThreadRecord};
use threadbot_core::traits::INeighborSearch;
use threadbot_embeddings::{euclidean_distance, squared_euclidean_distance};

/// Linear scan over every candidate.
///
/// Strict `<` comparison keeps the earliest candidate on ties, so the
/// result depends only on the query and the candidate order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceSearch;

impl BruteForceSearch {
    pub fn new() -> Self {
        Self
    }
}

impl INeighborSearch for BruteForceSearch {
    fn nearest<'a>(
        &self,
        query: &[f32],
        candidates: &'a [ThreadRecord],
    ) -> ThreadbotResult<Neighbor<'a>> {
        if candidates.is_empty() {
            return Err(RetrievalError::EmptyCandidateSet.into());
        }

        let mut best_index = 0;
        let mut best = f64::INFINITY;
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.dim() != query.len() {
                return Err(RetrievalError::QueryDimensionMismatch {
                    expected: candidate.dim(),
                    actual: query.len(),
                }
                .into());
            }
            let d = squared_euclidean_distance(query, &candidate.vector);
            if d < best {
                best = d;
                best_index = i;
            }
        }

        let record = &candidates[best_index];
        Ok(Neighbor {
            record,
            index: best_index,
            distance: euclidean_distance(query, &record.vector),
        })
    }

    fn name(&self) -> &str {
        "brute-force-euclidean"
    }
}
