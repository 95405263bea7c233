//! Property tests for nearest-thread search.

use proptest::prelude::*;
use threadbot_core::models::ThreadRecord;
use threadbot_core::traits::INeighborSearch;
use threadbot_embeddings::{euclidean_distance, squared_euclidean_distance};
use threadbot_retrieval::BruteForceSearch;

const DIM: usize = 3;

fn vector() -> impl Strategy<Value = Vec<f32>> {
    prop::collection::vec(-100.0f32..100.0, DIM)
}

fn candidates() -> impl Strategy<Value = Vec<ThreadRecord>> {
    prop::collection::vec(vector(), 1..40).prop_map(|vectors| {
        vectors
            .into_iter()
            .enumerate()
            .map(|(i, v)| ThreadRecord::new(i as u64, v))
            .collect()
    })
}

proptest! {
    #[test]
    fn winner_is_no_farther_than_any_candidate(query in vector(), threads in candidates()) {
        let hit = BruteForceSearch.nearest(&query, &threads).unwrap();
        for t in &threads {
            prop_assert!(hit.distance <= euclidean_distance(&query, &t.vector) + 1e-9);
        }
    }

    #[test]
    fn winner_is_first_of_its_distance(query in vector(), threads in candidates()) {
        let hit = BruteForceSearch.nearest(&query, &threads).unwrap();
        let best = squared_euclidean_distance(&query, &threads[hit.index].vector);
        for t in &threads[..hit.index] {
            prop_assert!(squared_euclidean_distance(&query, &t.vector) > best);
        }
    }

    #[test]
    fn duplicating_the_winner_keeps_the_first_copy(query in vector(), threads in candidates()) {
        let hit = BruteForceSearch.nearest(&query, &threads).unwrap();
        let mut extended = threads.clone();
        extended.push(ThreadRecord::new(u64::MAX, threads[hit.index].vector.clone()));
        let again = BruteForceSearch.nearest(&query, &extended).unwrap();
        prop_assert_eq!(again.index, hit.index);
    }
}
