//! Per-request routing state machine:
//! normalize → featurize → intent → (conversational | tag → retrieve) → answer.
//!
//! Every collaborator is built once and shared read-only, so one router can
//! serve concurrent requests.

use std::sync::Arc;

use threadbot_core::errors::ThreadbotResult;
use threadbot_core::intent::Intent;
use threadbot_core::models::RoutingDecision;
use threadbot_core::traits::{IConversationalAgent, IPredictor, ITextNormalizer, IVectorizer};
use threadbot_retrieval::ThreadRanker;
use tracing::{debug, info_span};

use crate::template::AnswerTemplate;

/// Collaborators of a [`DialogueRouter`].
pub struct RouterParts {
    pub normalizer: Box<dyn ITextNormalizer>,
    pub vectorizer: Box<dyn IVectorizer>,
    pub intent_classifier: Box<dyn IPredictor>,
    pub tag_classifier: Box<dyn IPredictor>,
    pub chat_agent: Arc<dyn IConversationalAgent>,
    pub ranker: ThreadRanker,
    pub template: AnswerTemplate,
}

/// Answers free-text queries.
pub struct DialogueRouter {
    normalizer: Box<dyn ITextNormalizer>,
    vectorizer: Box<dyn IVectorizer>,
    intent_classifier: Box<dyn IPredictor>,
    tag_classifier: Box<dyn IPredictor>,
    chat_agent: Arc<dyn IConversationalAgent>,
    ranker: ThreadRanker,
    template: AnswerTemplate,
}

impl DialogueRouter {
    pub fn new(parts: RouterParts) -> Self {
        let RouterParts {
            normalizer,
            vectorizer,
            intent_classifier,
            tag_classifier,
            chat_agent,
            ranker,
            template,
        } = parts;
        Self {
            normalizer,
            vectorizer,
            intent_classifier,
            tag_classifier,
            chat_agent,
            ranker,
            template,
        }
    }

    /// Decide how to answer `query` and do the work for that path.
    ///
    /// # Errors
    /// Any collaborator failure is returned as-is; no default answer is
    /// substituted.
    pub fn route(&self, query: &str) -> ThreadbotResult<RoutingDecision> {
        let span = info_span!("route", query_len = query.len());
        let _guard = span.enter();

        let normalized = self.normalizer.normalize(query);
        debug!(normalized = %normalized, "query normalized");

        let features = self.vectorizer.transform(&normalized)?;
        debug!(nnz = features.nnz(), dim = features.dim(), "query featurized");

        let label = self.intent_classifier.predict(&features)?;
        let intent = Intent::from_label(&label);
        debug!(label = %label, ?intent, "intent predicted");

        if intent.is_dialogue() {
            let reply = self.chat_agent.respond(query)?;
            debug!(agent = self.chat_agent.name(), "conversational reply");
            return Ok(RoutingDecision::Conversational { reply });
        }

        let tag = self.tag_classifier.predict(&features)?;
        debug!(tag = %tag, "tag predicted");

        let best = self.ranker.best_thread(&normalized, &tag)?;
        debug!(
            tag = %tag,
            thread_id = %best.thread_id,
            distance = best.distance,
            "thread retrieved"
        );
        Ok(RoutingDecision::Retrieved {
            tag,
            thread_id: best.thread_id,
            distance: best.distance,
        })
    }

    /// Route `query` and render the reply text.
    pub fn generate_answer(&self, query: &str) -> ThreadbotResult<String> {
        Ok(self.render(&self.route(query)?))
    }

    /// Reply text for a routing decision.
    pub fn render(&self, decision: &RoutingDecision) -> String {
        match decision {
            RoutingDecision::Conversational { reply } => reply.clone(),
            RoutingDecision::Retrieved { tag, thread_id, .. } => {
                self.template.render(tag, thread_id)
            }
        }
    }

    /// Tags with a thread partition.
    pub fn available_tags(&self) -> ThreadbotResult<Vec<String>> {
        self.ranker.partitions().available_tags()
    }

    /// Labels the tag classifier can emit.
    pub fn tag_labels(&self) -> &[String] {
        self.tag_classifier.labels()
    }
}
