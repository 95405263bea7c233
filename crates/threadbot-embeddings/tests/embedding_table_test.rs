//! File-backed loading of the word-embedding table.

use std::io::Write;
use std::sync::Arc;

use threadbot_core::errors::{EmbeddingError, ThreadbotError};
use threadbot_embeddings::{EmbeddingTable, VectorAverager};

fn write_tsv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn every_vector_has_the_inferred_dimension() {
    let file = write_tsv("python\t0.1\t0.2\t0.3\njava\t1\t2\t3\nc++\t-1\t0\t1\n");
    let table = EmbeddingTable::load(file.path()).unwrap();
    assert_eq!(table.dim(), 3);
    for token in ["python", "java", "c++"] {
        assert_eq!(table.get(token).unwrap().len(), 3, "token {token}");
    }
}

#[test]
fn one_line_with_an_extra_field_fails_the_load() {
    let file = write_tsv("a\t1\t2\nb\t3\t4\nc\t5\t6\t7\n");
    let err = EmbeddingTable::load(file.path()).unwrap_err();
    assert!(matches!(
        err,
        ThreadbotError::EmbeddingError(EmbeddingError::InconsistentDimension {
            line: 3,
            expected: 2,
            actual: 3,
        })
    ));
}

#[test]
fn missing_file_is_resource_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let err = EmbeddingTable::load(dir.path().join("word_embeddings.tsv")).unwrap_err();
    assert!(matches!(err, ThreadbotError::ResourceUnavailable { .. }));
    assert!(err.is_resource_unavailable());
}

#[test]
fn loaded_table_feeds_the_averager() {
    let file = write_tsv("sort\t2\t0\nlist\t0\t2\n");
    let table = Arc::new(EmbeddingTable::load(file.path()).unwrap());
    let averager = VectorAverager::new(table);
    assert_eq!(averager.dim(), 2);
    assert_eq!(averager.vectorize("sort list python"), vec![1.0, 1.0]);
}
