use crate::errors::ThreadbotResult;

/// Small-talk responder.
pub trait IConversationalAgent: Send + Sync {
    /// Reply to the raw, unnormalized user text.
    fn respond(&self, raw_text: &str) -> ThreadbotResult<String>;

    /// Human-readable agent name.
    fn name(&self) -> &str;
}
