//! Session containers: the labeled training set and the unlabeled pool.

use prospect_core::errors::{LearningError, ProspectResult};
use prospect_core::patch::{Label, Patch, PatchId};

/// Labeled patches accumulated across feedback rounds. Append-only within
/// a session; every insertion path re-checks that the label is assigned.
#[derive(Debug, Clone, Default)]
pub struct TrainingSet {
    patches: Vec<Patch>,
}

impl TrainingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn push_labeled(&mut self, patch: Patch) -> ProspectResult<()> {
        if !patch.label.is_assigned() {
            return Err(LearningError::UnlabeledPatch { patch: patch.id }.into());
        }
        self.patches.push(patch);
        Ok(())
    }

    pub fn extend_labeled(
        &mut self,
        patches: impl IntoIterator<Item = Patch>,
    ) -> ProspectResult<()> {
        for patch in patches {
            self.push_labeled(patch)?;
        }
        Ok(())
    }

    /// Mean of the raw (unscaled) feature vectors, used to pick bootstrap
    /// negatives. `None` for an empty set.
    pub fn centroid(&self) -> Option<Vec<f64>> {
        let first = self.patches.first()?;
        let mut sum = vec![0.0; first.features.len()];
        for patch in &self.patches {
            for (acc, value) in sum.iter_mut().zip(patch.features.values()) {
                *acc += value;
            }
        }
        let n = self.patches.len() as f64;
        Some(sum.into_iter().map(|acc| acc / n).collect())
    }
}

/// Unlabeled patches available for selection. The pool owns candidate
/// lifecycle: ingestion drops non-finite vectors and resets any label or
/// decision value the caller left behind.
#[derive(Debug, Clone, Default)]
pub struct CandidatePool {
    patches: Vec<Patch>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a pool from archive patches. Returns the pool and the number
    /// of patches dropped for carrying non-finite features.
    pub fn ingest(patches: Vec<Patch>) -> (Self, usize) {
        let total = patches.len();
        let mut kept = Vec::with_capacity(total);
        for mut patch in patches {
            if patch.features.has_non_finite() {
                continue;
            }
            patch.label = Label::Unlabeled;
            patch.decision = None;
            kept.push(patch);
        }
        let dropped = total - kept.len();
        (Self { patches: kept }, dropped)
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    pub fn clear(&mut self) {
        self.patches.clear();
    }

    /// Remove and return the patches whose ids appear in `ids`. Both the
    /// removed batch and the remaining pool keep their pool order; ids
    /// with no matching patch are simply absent from the result.
    pub fn take_by_ids(&mut self, ids: &[PatchId]) -> Vec<Patch> {
        let wanted: std::collections::HashSet<PatchId> = ids.iter().copied().collect();
        let (taken, kept) = std::mem::take(&mut self.patches)
            .into_iter()
            .partition(|patch| wanted.contains(&patch.id));
        self.patches = kept;
        taken
    }
}
