use serde::{Deserialize, Serialize};

use super::ThreadId;

/// Per-request outcome of routing a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutingDecision {
    /// Small talk: the conversational agent's reply, verbatim.
    Conversational { reply: String },
    /// Retrieval: the predicted tag and the closest thread in its partition.
    Retrieved {
        tag: String,
        thread_id: ThreadId,
        distance: f64,
    },
}
