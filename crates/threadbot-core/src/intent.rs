use serde::{Deserialize, Serialize};

use crate::constants::DIALOGUE_LABEL;

/// Coarse query intent, decoded from the intent classifier's raw label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Small talk, answered by the conversational agent.
    Dialogue,
    /// Everything else, answered by thread retrieval.
    Retrieval,
}

impl Intent {
    /// All variants for iteration.
    pub const ALL: [Intent; 2] = [Self::Dialogue, Self::Retrieval];

    /// Decode a raw predictor label. Only `"dialogue"` means small talk;
    /// any other label routes to retrieval.
    pub fn from_label(label: &str) -> Self {
        if label == DIALOGUE_LABEL {
            Self::Dialogue
        } else {
            Self::Retrieval
        }
    }

    /// Whether this intent is answered by the conversational agent.
    pub fn is_dialogue(&self) -> bool {
        matches!(self, Self::Dialogue)
    }
}
