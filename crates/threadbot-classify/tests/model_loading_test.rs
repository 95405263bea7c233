//! Loading exported vectorizer and classifier parameters from disk, then
//! running them end to end on normalized text.

use std::io::Write;

use threadbot_classify::{LinearPredictor, StopwordNormalizer, TfIdfVectorizer};
use threadbot_core::traits::{IPredictor, ITextNormalizer, IVectorizer};
use threadbot_core::ThreadbotError;

fn write_json(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const VECTORIZER: &str = r#"{
    "vocabulary": {"hello": 0, "sort": 1, "list": 2, "python": 3, "sort list": 4},
    "idf": [1.0, 1.5, 1.2, 2.0, 2.5],
    "ngram_range": [1, 2],
    "token_pattern": "(\\S+)",
    "norm": "l2"
}"#;

const INTENT: &str = r#"{
    "classes": ["dialogue", "stackoverflow"],
    "coef": [[-4.0, 2.0, 2.0, 2.0, 2.0]],
    "intercept": [-0.1]
}"#;

const TAGS: &str = r#"{
    "classes": ["java", "python"],
    "coef": [[0.0, 0.5, 0.5, -1.0, 0.0], [0.0, 0.5, 0.5, 3.0, 0.0]],
    "intercept": [0.0, 0.0]
}"#;

#[test]
fn loaded_models_route_a_programming_question() {
    let vec_file = write_json(VECTORIZER);
    let intent_file = write_json(INTENT);
    let tag_file = write_json(TAGS);

    let vectorizer = TfIdfVectorizer::load(vec_file.path()).unwrap();
    let intent = LinearPredictor::load(intent_file.path(), "intent classifier").unwrap();
    let tags = LinearPredictor::load(tag_file.path(), "tag classifier").unwrap();
    assert_eq!(vectorizer.dimensions(), 5);
    assert_eq!(intent.n_features(), 5);

    let text = StopwordNormalizer.normalize("How do I sort a list in Python?");
    let features = vectorizer.transform(&text).unwrap();
    assert_eq!(intent.predict(&features).unwrap(), "stackoverflow");
    assert_eq!(tags.predict(&features).unwrap(), "python");

    let greeting = vectorizer
        .transform(&StopwordNormalizer.normalize("Hello!"))
        .unwrap();
    assert_eq!(intent.predict(&greeting).unwrap(), "dialogue");
}

#[test]
fn missing_parameter_file_is_resource_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = TfIdfVectorizer::load(dir.path().join("tfidf_vectorizer.json")).unwrap_err();
    assert!(err.is_resource_unavailable());
    let err = LinearPredictor::load(dir.path().join("tag_classifier.json"), "tag classifier")
        .unwrap_err();
    assert!(err.is_resource_unavailable());
}

#[test]
fn malformed_json_is_a_model_error_naming_the_model() {
    let file = write_json(r#"{"classes": ["a", "b"], "coef": "oops"}"#);
    let err = LinearPredictor::load(file.path(), "intent classifier").unwrap_err();
    assert!(matches!(err, ThreadbotError::ModelError(_)));
    assert!(err.to_string().contains("intent classifier"));
}

#[test]
fn vectorizer_and_predictor_width_mismatch_surfaces_at_predict() {
    let vec_file = write_json(VECTORIZER);
    let narrow = write_json(r#"{"classes": ["a", "b"], "coef": [[1.0, 1.0]], "intercept": [0.0]}"#);
    let vectorizer = TfIdfVectorizer::load(vec_file.path()).unwrap();
    let predictor = LinearPredictor::load(narrow.path(), "intent classifier").unwrap();
    let features = vectorizer.transform("python").unwrap();
    assert!(predictor.predict(&features).is_err());
}
