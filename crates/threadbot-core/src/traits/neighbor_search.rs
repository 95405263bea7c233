use crate::errors::ThreadbotResult;
use crate::models::{Neighbor, ThreadRecord};

/// Nearest-neighbor search over one partition.
pub trait INeighborSearch: Send + Sync {
    /// Return the candidate closest to `query`. Ties go to the earliest
    /// candidate. Fails on an empty candidate set.
    fn nearest<'a>(
        &self,
        query: &[f32],
        candidates: &'a [ThreadRecord],
    ) -> ThreadbotResult<Neighbor<'a>>;

    /// Human-readable search name.
    fn name(&self) -> &str;
}
