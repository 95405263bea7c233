/// threadbot version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw intent label the intent classifier emits for small talk.
pub const DIALOGUE_LABEL: &str = "dialogue";

/// File extension of per-tag partition resources.
pub const PARTITION_FILE_EXTENSION: &str = "json";

/// Placeholder for the predicted tag in the answer template.
pub const TAG_PLACEHOLDER: &str = "{tag}";

/// Placeholder for the winning thread identifier in the answer template.
pub const THREAD_ID_PLACEHOLDER: &str = "{thread_id}";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "THREADBOT_LOG";
