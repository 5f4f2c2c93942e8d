use crate::errors::ProspectResult;
use crate::patch::{Label, Patch};

/// Result of classifying one patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub label: Label,
    /// Signed distance from the decision boundary. Positive leans
    /// relevant, negative leans irrelevant.
    pub decision: f64,
}

/// Binary margin classifier driving the feedback loop.
pub trait IClassifier: Send + Sync {
    /// Fit the classifier to a fully labeled, two-class training set.
    /// A failed fit must leave any previously trained state usable.
    fn train(&mut self, patches: &[Patch]) -> ProspectResult<()>;

    /// Signed distance of a patch from the decision boundary.
    fn decision_value(&self, patch: &Patch) -> ProspectResult<f64>;

    /// Kernel similarity of two patches in the space the classifier
    /// decides in. Used by diversity clustering so cluster geometry and
    /// decision geometry agree.
    fn kernel(&self, a: &Patch, b: &Patch) -> ProspectResult<f64>;

    /// Whether a model is available for classification.
    fn is_trained(&self) -> bool;

    /// Classify one patch: decision value plus the thresholded label.
    fn classify(&self, patch: &Patch) -> ProspectResult<Classification> {
        let decision = self.decision_value(patch)?;
        Ok(Classification {
            label: Label::from_decision(decision),
            decision,
        })
    }
}
