//! Assembles a [`DialogueRouter`] from configuration.
//!
//! Every process-wide resource is loaded here, before the first request;
//! any failure aborts startup. The conversational agent is the exception
//! unless `chat.eager_init` is set.

use std::sync::Arc;

use threadbot_chat::SharedAgent;
use threadbot_classify::{LinearPredictor, StopwordNormalizer, TfIdfVectorizer};
use threadbot_core::config::ThreadbotConfig;
use threadbot_core::errors::{ModelError, ThreadbotResult};
use threadbot_core::traits::{IConversationalAgent, IPartitionIndex, IVectorizer};
use threadbot_embeddings::{EmbeddingTable, VectorAverager};
use threadbot_retrieval::{BruteForceSearch, PartitionIndex, ThreadRanker};
use tracing::info;

use crate::router::{DialogueRouter, RouterParts};
use crate::template::AnswerTemplate;

/// Load all resources named by `config` and wire the router.
pub fn build_router(config: &ThreadbotConfig) -> ThreadbotResult<DialogueRouter> {
    let resources = &config.resources;

    let template = AnswerTemplate::new(&config.retrieval.answer_template)?;

    let vectorizer = TfIdfVectorizer::load(&resources.vectorizer_path)?;
    let intent_classifier = LinearPredictor::load(&resources.intent_model_path, "intent classifier")?;
    let tag_classifier = LinearPredictor::load(&resources.tag_model_path, "tag classifier")?;
    for classifier in [&intent_classifier, &tag_classifier] {
        if classifier.n_features() != vectorizer.dimensions() {
            return Err(ModelError::FeatureMismatch {
                expected: classifier.n_features(),
                actual: vectorizer.dimensions(),
            }
            .into());
        }
    }

    let table = Arc::new(EmbeddingTable::load(&resources.word_embeddings_path)?);
    let partitions = PartitionIndex::new(
        &resources.thread_embeddings_folder,
        table.dim(),
        &config.retrieval,
    );
    let tags = partitions.available_tags()?;

    let chat_agent = Arc::new(SharedAgent::from_config(&config.chat));
    if config.chat.eager_init {
        chat_agent.initialize()?;
    }

    info!(
        vocabulary = vectorizer.dimensions(),
        embedding_dim = table.dim(),
        partitions = tags.len(),
        cache_partitions = partitions.is_cached(),
        eager_chat = config.chat.eager_init,
        "router ready"
    );

    Ok(DialogueRouter::new(RouterParts {
        normalizer: Box::new(StopwordNormalizer),
        vectorizer: Box::new(vectorizer),
        intent_classifier: Box::new(intent_classifier),
        tag_classifier: Box::new(tag_classifier),
        chat_agent: chat_agent as Arc<dyn IConversationalAgent>,
        ranker: ThreadRanker::new(
            VectorAverager::new(table),
            Arc::new(partitions),
            Box::new(BruteForceSearch),
        ),
        template,
    }))
}
