//! Question + tag → most similar thread within that tag's partition.

use std::sync::Arc;

use threadbot_core::errors::ThreadbotResult;
use threadbot_core::models::ThreadId;
use threadbot_core::traits::{INeighborSearch, IPartitionIndex};
use threadbot_embeddings::VectorAverager;
use tracing::{debug, warn};

/// Best thread for one question.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedThread {
    pub thread_id: ThreadId,
    /// Position within the partition.
    pub index: usize,
    pub distance: f64,
    /// Question tokens found in the embedding vocabulary.
    pub matched_tokens: usize,
}

/// Embeds a normalized question and searches the partition of its tag.
///
/// Collaborators are injected once at startup and shared for the process
/// lifetime.
pub struct ThreadRanker {
    averager: VectorAverager,
    partitions: Arc<dyn IPartitionIndex>,
    search: Box<dyn INeighborSearch>,
}

impl ThreadRanker {
    pub fn new(
        averager: VectorAverager,
        partitions: Arc<dyn IPartitionIndex>,
        search: Box<dyn INeighborSearch>,
    ) -> Self {
        Self {
            averager,
            partitions,
            search,
        }
    }

    /// The partition source.
    pub fn partitions(&self) -> &Arc<dyn IPartitionIndex> {
        &self.partitions
    }

    /// Find the thread closest to `normalized_question` among the threads
    /// tagged `tag`.
    ///
    /// # Errors
    /// Partition errors for an unknown or corrupt tag, `EmptyCandidateSet`
    /// for a partition with no threads.
    pub fn best_thread(&self, normalized_question: &str, tag: &str) -> ThreadbotResult<RankedThread> {
        let threads = self.partitions.threads_for_tag(tag)?;
        let query = self.averager.vectorize_detailed(normalized_question);
        if query.is_out_of_vocabulary() {
            warn!(
                tag,
                tokens = query.tokens,
                "no question token has an embedding; searching with the zero vector"
            );
        }
        let hit = self.search.nearest(&query.vector, &threads)?;

        debug!(
            tag,
            candidates = threads.len(),
            matched_tokens = query.matched,
            thread_id = %hit.record.id,
            distance = hit.distance,
            search = self.search.name(),
            "thread ranked"
        );
        Ok(RankedThread {
            thread_id: hit.record.id.clone(),
            index: hit.index,
            distance: hit.distance,
            matched_tokens: query.matched,
        })
    }
}
