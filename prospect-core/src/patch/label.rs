use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DECISION_THRESHOLD;

/// Relevance label a patch carries through the feedback loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Label {
    /// Not yet labeled by the user or the classifier.
    #[default]
    Unlabeled,
    Relevant,
    Irrelevant,
}

impl Label {
    /// Whether the user or the classifier has assigned this label.
    pub fn is_assigned(self) -> bool {
        !matches!(self, Label::Unlabeled)
    }

    /// Label implied by a decision value: relevant at or above the
    /// confidence threshold, irrelevant below it.
    pub fn from_decision(decision: f64) -> Self {
        if decision >= DECISION_THRESHOLD {
            Label::Relevant
        } else {
            Label::Irrelevant
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Label::Unlabeled => "unlabeled",
            Label::Relevant => "relevant",
            Label::Irrelevant => "irrelevant",
        };
        write!(f, "{name}")
    }
}
