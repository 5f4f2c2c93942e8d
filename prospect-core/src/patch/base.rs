use std::fmt;

use serde::{Deserialize, Serialize};

use super::label::Label;
use super::vector::FeatureVector;

/// Identifier assigned by the external feature extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchId(pub u64);

impl fmt::Display for PatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An image patch moving through the feedback loop: extracted features,
/// current relevance label, and the most recent decision value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patch {
    pub id: PatchId,
    pub features: FeatureVector,
    pub label: Label,
    /// Signed distance from the decision boundary, written by
    /// classification. `None` until the patch is first classified.
    pub decision: Option<f64>,
}

impl Patch {
    pub fn new(id: PatchId, features: FeatureVector) -> Self {
        Self {
            id,
            features,
            label: Label::Unlabeled,
            decision: None,
        }
    }

    pub fn labeled(id: PatchId, features: FeatureVector, label: Label) -> Self {
        Self {
            id,
            features,
            label,
            decision: None,
        }
    }

    /// Absolute decision value: how close the patch sits to the boundary.
    pub fn functional_distance(&self) -> Option<f64> {
        self.decision.map(f64::abs)
    }
}

/// Identity equality: two patches are the same entity when their ids match.
/// Labels and decision values change across feedback rounds without
/// changing which patch is meant.
impl PartialEq for Patch {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Patch {}
