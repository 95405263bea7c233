//! Process-wide conversational agent, constructed at most once.
//!
//! Building the agent (corpus load and indexing) is paid on the first
//! small-talk request, or at startup with `chat.eager_init`. Concurrent
//! first requests block on a single build. A failed build is reported to
//! the caller and attempted again by the next request.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use threadbot_core::config::ChatConfig;
use threadbot_core::errors::ThreadbotResult;
use threadbot_core::traits::IConversationalAgent;
use tracing::info;

use crate::agent::CorpusChatAgent;
use crate::corpus::ConversationCorpus;

type AgentBuilder = dyn Fn() -> ThreadbotResult<Arc<dyn IConversationalAgent>> + Send + Sync;

/// Lazily built, shared [`IConversationalAgent`].
pub struct SharedAgent {
    cell: OnceCell<Arc<dyn IConversationalAgent>>,
    builder: Box<AgentBuilder>,
}

impl SharedAgent {
    /// Wrap an arbitrary agent constructor.
    pub fn new<F>(builder: F) -> Self
    where
        F: Fn() -> ThreadbotResult<Arc<dyn IConversationalAgent>> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            builder: Box::new(builder),
        }
    }

    /// Corpus agent configured by `[chat]`: the YAML corpus at
    /// `corpus_path`, or the built-in corpus when unset.
    pub fn from_config(config: &ChatConfig) -> Self {
        let config = config.clone();
        Self::new(move || {
            let corpus = match &config.corpus_path {
                Some(path) => ConversationCorpus::load(path)?,
                None => ConversationCorpus::builtin()?,
            };
            let agent = CorpusChatAgent::new(&corpus, &config)?;
            info!(statements = agent.len(), "conversational agent built");
            Ok(Arc::new(agent) as Arc<dyn IConversationalAgent>)
        })
    }

    /// The agent, building it if this is the first successful call.
    pub fn get(&self) -> ThreadbotResult<&Arc<dyn IConversationalAgent>> {
        self.cell.get_or_try_init(|| (self.builder)())
    }

    /// Build now. Used for eager startup initialization.
    pub fn initialize(&self) -> ThreadbotResult<()> {
        self.get().map(|_| ())
    }

    /// Whether the agent has been built.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl IConversationalAgent for SharedAgent {
    fn respond(&self, raw_text: &str) -> ThreadbotResult<String> {
        self.get()?.respond(raw_text)
    }

    fn name(&self) -> &str {
        self.cell.get().map_or("shared", |agent| agent.name())
    }
}

impl std::fmt::Debug for SharedAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAgent")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
