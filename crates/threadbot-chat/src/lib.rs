//! # threadbot-chat
//!
//! Small-talk path of the router.
//!
//! - [`ConversationCorpus`]: statement → response pairs from ChatterBot-style
//!   YAML corpora, with a built-in English corpus
//! - [`CorpusChatAgent`]: answers with the response of the most similar
//!   known statement
//! - [`SharedAgent`]: builds the agent on first use, once per process

pub mod agent;
pub mod corpus;
pub mod shared;

pub use agent::CorpusChatAgent;
pub use corpus::{ConversationCorpus, StatementPair};
pub use shared::SharedAgent;
