use threadbot_core::errors::*;

#[test]
fn resource_unavailable_carries_path_and_reason() {
    let err = ThreadbotError::resource_unavailable("/data/word_embeddings.tsv", "No such file");
    let msg = err.to_string();
    assert!(msg.contains("/data/word_embeddings.tsv"));
    assert!(msg.contains("No such file"));
    assert!(err.is_resource_unavailable());
}

#[test]
fn unknown_partition_is_resource_unavailable() {
    let err: ThreadbotError = PartitionError::Unknown {
        tag: "cobol".into(),
    }
    .into();
    assert!(err.is_resource_unavailable());
    assert!(err.to_string().contains("cobol"));
}

#[test]
fn corrupt_partition_is_not_resource_unavailable() {
    let err: ThreadbotError = PartitionError::Corrupt {
        tag: "python".into(),
        reason: "3 ids, 2 vectors".into(),
    }
    .into();
    assert!(!err.is_resource_unavailable());
    let msg = err.to_string();
    assert!(msg.contains("python"));
    assert!(msg.contains("3 ids, 2 vectors"));
}

#[test]
fn embedding_inconsistent_dimension_carries_values() {
    let err = EmbeddingError::InconsistentDimension {
        line: 7,
        expected: 100,
        actual: 101,
    };
    let msg = err.to_string();
    assert!(msg.contains("line 7"));
    assert!(msg.contains("100"));
    assert!(msg.contains("101"));
}

#[test]
fn embedding_invalid_value_carries_value() {
    let err = EmbeddingError::InvalidValue {
        line: 2,
        value: "abc".into(),
    };
    assert!(err.to_string().contains("abc"));
}

// --- From impls ---

#[test]
fn embedding_error_converts_to_threadbot_error() {
    let err: ThreadbotError = EmbeddingError::Empty {
        source_name: "x.tsv".into(),
    }
    .into();
    assert!(matches!(err, ThreadbotError::EmbeddingError(_)));
}

#[test]
fn retrieval_error_converts_to_threadbot_error() {
    let err: ThreadbotError = RetrievalError::EmptyCandidateSet.into();
    assert!(matches!(
        err,
        ThreadbotError::RetrievalError(RetrievalError::EmptyCandidateSet)
    ));
}

#[test]
fn model_error_converts_to_threadbot_error() {
    let err: ThreadbotError = ModelError::FeatureMismatch {
        expected: 10,
        actual: 8,
    }
    .into();
    assert!(matches!(err, ThreadbotError::ModelError(_)));
    assert!(err.to_string().contains("10"));
}

#[test]
fn chat_error_converts_to_threadbot_error() {
    let err: ThreadbotError = ChatError::EmptyCorpus.into();
    assert!(matches!(err, ThreadbotError::ChatError(_)));
}

#[test]
fn serialization_error_converts_to_threadbot_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: ThreadbotError = json_err.into();
    assert!(matches!(err, ThreadbotError::SerializationError(_)));
}
