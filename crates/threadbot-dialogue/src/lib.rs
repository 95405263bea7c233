//! # threadbot-dialogue
//!
//! Routes one free-text query to the conversational agent or to thread
//! retrieval and renders the final answer.

pub mod router;
pub mod runtime;
pub mod template;

pub use router::{DialogueRouter, RouterParts};
pub use runtime::build_router;
pub use template::AnswerTemplate;
