//! Active-learning session engine.
//!
//! Sequences the loop a retrieval frontend drives: seed with query
//! patches, bootstrap negatives from archive randoms, then rounds of
//! select → user labels → retrain, classifying archive patches at any
//! point once a model exists. Every operation commits its state changes
//! only after the fallible steps succeed.

use std::path::Path;

use prospect_classifier::SvmClassifier;
use prospect_core::config::{ClassifierConfig, LearningConfig};
use prospect_core::errors::{LearningError, ProspectResult};
use prospect_core::patch::{Label, Patch, PatchId};
use prospect_core::traits::IClassifier;
use tracing::{debug, info};

use crate::kernel_kmeans;
use crate::session::SessionState;
use crate::sets::{CandidatePool, TrainingSet};
use crate::uncertainty;

/// Drives one retrieval session over a patch archive.
pub struct ActiveLearningEngine {
    config: LearningConfig,
    classifier: SvmClassifier,
    training: TrainingSet,
    pool: CandidatePool,
    session: SessionState,
}

impl ActiveLearningEngine {
    pub fn new() -> Self {
        Self::with_config(LearningConfig::default(), ClassifierConfig::default())
    }

    pub fn with_config(config: LearningConfig, classifier_config: ClassifierConfig) -> Self {
        Self {
            config,
            classifier: SvmClassifier::with_config(classifier_config),
            training: TrainingSet::new(),
            pool: CandidatePool::new(),
            session: SessionState::new(),
        }
    }

    /// Start a session from the user's query patches. All of them must
    /// carry the same assigned label and finite features; the slice is
    /// cloned, never mutated. Resets the round counter and clears any
    /// pool left from a previous session.
    pub fn set_query_patches(&mut self, patches: &[Patch]) -> ProspectResult<()> {
        validate_query_patches(patches)?;

        let mut training = TrainingSet::new();
        training.extend_labeled(patches.iter().cloned())?;

        self.training = training;
        self.pool.clear();
        self.session.reset();
        info!(query = patches.len(), "seeded session from query patches");
        Ok(())
    }

    /// Fill the candidate pool from archive patches and bootstrap the
    /// first model: the `bootstrap_negatives` patches farthest from the
    /// query centroid are labeled irrelevant and trained against the
    /// query set. Nothing is committed when that training fails.
    pub fn set_random_patches(&mut self, patches: Vec<Patch>) -> ProspectResult<()> {
        let centroid = match self.training.centroid() {
            Some(centroid) => centroid,
            None => return Err(LearningError::MissingQuerySet.into()),
        };

        let (mut pool, dropped) = CandidatePool::ingest(patches);
        if dropped > 0 {
            debug!(dropped, "dropped candidate patches with non-finite features");
        }

        let negative_ids = farthest_ids(pool.patches(), &centroid, self.config.bootstrap_negatives);
        let negatives = pool.take_by_ids(&negative_ids);

        let mut candidate = self.training.clone();
        for mut patch in negatives {
            patch.label = Label::Irrelevant;
            candidate.push_labeled(patch)?;
        }

        self.classifier.train(candidate.patches())?;
        info!(
            training = candidate.len(),
            pool = pool.len(),
            "bootstrapped classifier from query and random patches"
        );
        self.training = candidate;
        self.pool = pool;
        Ok(())
    }

    /// One feedback round's question: the `count` most ambiguous,
    /// mutually diverse pool patches. They leave the pool; hand them back
    /// through [`ActiveLearningEngine::train`] once labeled. A short pool
    /// shrinks the answer instead of failing.
    pub fn most_ambiguous_patches(&mut self, count: usize) -> ProspectResult<Vec<Patch>> {
        if count == 0 || self.pool.is_empty() {
            return Ok(Vec::new());
        }

        let quota = count.saturating_mul(self.config.candidate_multiplier);
        let uncertain = uncertainty::select(
            self.pool.patches(),
            &self.classifier,
            quota,
            self.session.iteration(),
            self.config.initial_rounds,
        )?;
        let uncertain_ids: Vec<PatchId> = uncertain.iter().map(|patch| patch.id).collect();

        let diverse_ids = kernel_kmeans::representatives(
            &uncertain,
            count,
            &self.classifier,
            self.config.max_kmeans_iterations,
        )?;

        let batch = self.pool.take_by_ids(&diverse_ids);
        if batch.len() != diverse_ids.len() {
            return Err(LearningError::DiversityMismatch {
                requested: diverse_ids.len(),
                produced: batch.len(),
            }
            .into());
        }

        info!(
            requested = count,
            uncertain = uncertain_ids.len(),
            produced = batch.len(),
            iteration = self.session.iteration(),
            "selected feedback batch"
        );
        self.session.record_selection(uncertain_ids, diverse_ids);
        Ok(batch)
    }

    /// Absorb user-labeled patches and retrain. The grown training set
    /// and the round counter commit only when training succeeds; an
    /// unlabeled patch in the batch fails the round before the model is
    /// touched.
    pub fn train(&mut self, labeled: Vec<Patch>) -> ProspectResult<()> {
        let mut candidate = self.training.clone();
        candidate.extend_labeled(labeled)?;
        self.classifier.train(candidate.patches())?;

        self.training = candidate;
        self.session.advance();
        info!(
            iteration = self.session.iteration(),
            training = self.training.len(),
            "completed feedback round"
        );
        Ok(())
    }

    /// Score patches in place: each gets its decision value and the
    /// thresholded label. Touches neither the training set nor the pool,
    /// so rescoring with an unchanged model is idempotent.
    pub fn classify(&self, patches: &mut [Patch]) -> ProspectResult<()> {
        for patch in patches.iter_mut() {
            let result = self.classifier.classify(patch)?;
            patch.label = result.label;
            patch.decision = Some(result.decision);
        }
        Ok(())
    }

    /// The labeled patches accumulated so far, query patches included.
    pub fn training_data(&self) -> &[Patch] {
        self.training.patches()
    }

    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    pub fn iteration(&self) -> usize {
        self.session.iteration()
    }

    pub fn is_trained(&self) -> bool {
        self.classifier.is_trained()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Persist the trained model to a snapshot file.
    pub fn save_model(&self, path: &Path) -> ProspectResult<()> {
        self.classifier.save(path)
    }

    /// Restore a previously saved model, replacing the current one. The
    /// training set and pool are session-local and are not restored.
    pub fn load_model(&mut self, path: &Path) -> ProspectResult<()> {
        self.classifier.load(path)
    }
}

impl Default for ActiveLearningEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_query_patches(patches: &[Patch]) -> ProspectResult<()> {
    if patches.is_empty() {
        return Err(LearningError::EmptyQuerySet.into());
    }

    let mut labels: Vec<Label> = Vec::new();
    for patch in patches {
        if patch.features.has_non_finite() {
            return Err(LearningError::NonFiniteFeature { patch: patch.id }.into());
        }
        if !patch.label.is_assigned() {
            return Err(LearningError::UnlabeledPatch { patch: patch.id }.into());
        }
        if !labels.contains(&patch.label) {
            labels.push(patch.label);
        }
    }
    if labels.len() != 1 {
        return Err(LearningError::MixedQueryLabels {
            distinct: labels.len(),
        }
        .into());
    }
    Ok(())
}

/// Ids of the `count` patches farthest from the centroid, farthest
/// first. Distance ties keep pool order.
fn farthest_ids(patches: &[Patch], centroid: &[f64], count: usize) -> Vec<PatchId> {
    let mut ranked: Vec<(usize, f64)> = patches
        .iter()
        .enumerate()
        .map(|(i, patch)| {
            let distance = patch
                .features
                .values()
                .zip(centroid.iter().copied())
                .map(|(a, b)| (a - b) * (a - b))
                .sum::<f64>();
            (i, distance)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(count)
        .map(|(i, _)| patches[i].id)
        .collect()
}
