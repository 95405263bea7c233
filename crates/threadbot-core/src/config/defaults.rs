// Single source of truth for all default values.

// --- Resources ---
pub const DEFAULT_INTENT_MODEL_PATH: &str = "intent_recognizer.json";
pub const DEFAULT_TAG_MODEL_PATH: &str = "tag_classifier.json";
pub const DEFAULT_VECTORIZER_PATH: &str = "tfidf_vectorizer.json";
pub const DEFAULT_WORD_EMBEDDINGS_PATH: &str = "data/word_embeddings.tsv";
pub const DEFAULT_THREAD_EMBEDDINGS_FOLDER: &str = "thread_embeddings_by_tags";

// --- Retrieval ---
pub const DEFAULT_CACHE_PARTITIONS: bool = true;
pub const DEFAULT_PARTITION_CACHE_CAPACITY: u64 = 256;
pub const DEFAULT_ANSWER_TEMPLATE: &str =
    "I think its about {tag}\nThis thread might help you: https://stackoverflow.com/questions/{thread_id}";

// --- Chat ---
pub const DEFAULT_CHAT_RESPONSE: &str = "I am sorry, but I do not understand.";
pub const DEFAULT_CHAT_MIN_CONFIDENCE: f64 = 0.5;
pub const DEFAULT_CHAT_EAGER_INIT: bool = false;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
