use std::sync::Arc;

use proptest::prelude::*;
use threadbot_embeddings::{EmbeddingTable, VectorAverager};

fn fixed_table() -> Arc<EmbeddingTable> {
    Arc::new(
        EmbeddingTable::from_entries([
            ("alpha", vec![1.0, -1.0, 0.5]),
            ("beta", vec![0.0, 2.0, 4.0]),
            ("gamma", vec![-3.0, 0.25, 1.0]),
        ])
        .unwrap(),
    )
}

proptest! {
    #[test]
    fn output_length_always_equals_dim(text in ".{0,200}") {
        let averager = VectorAverager::new(fixed_table());
        prop_assert_eq!(averager.vectorize(&text).len(), 3);
    }

    #[test]
    fn mean_stays_within_component_bounds(
        words in proptest::collection::vec(prop_oneof!["alpha", "beta", "gamma", "delta"], 0..30)
    ) {
        let averager = VectorAverager::new(fixed_table());
        let out = averager.vectorize_detailed(&words.join(" "));
        if out.matched == 0 {
            prop_assert!(out.vector.iter().all(|&x| x == 0.0));
        } else {
            // Column-wise min/max over the vocabulary.
            let lo = [-3.0f32, -1.0, 0.5];
            let hi = [1.0f32, 2.0, 4.0];
            for (i, x) in out.vector.iter().enumerate() {
                prop_assert!(*x >= lo[i] - 1e-5 && *x <= hi[i] + 1e-5);
            }
        }
    }

    #[test]
    fn token_order_does_not_matter(
        mut words in proptest::collection::vec(prop_oneof!["alpha", "beta", "gamma"], 1..20)
    ) {
        let averager = VectorAverager::new(fixed_table());
        let forward = averager.vectorize(&words.join(" "));
        words.reverse();
        let backward = averager.vectorize(&words.join(" "));
        for (a, b) in forward.iter().zip(&backward) {
            prop_assert!((a - b).abs() < 1e-5);
        }
    }
}
