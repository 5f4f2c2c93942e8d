//! Classifier engine wiring scaling, tuning, and the solver together.

use std::fs;
use std::path::Path;

use prospect_core::config::ClassifierConfig;
use prospect_core::errors::{ClassifierError, ProspectResult};
use prospect_core::patch::{Label, Patch};
use prospect_core::traits::IClassifier;
use tracing::{debug, info};

use crate::model::{self, FittedSvm, ModelSnapshot, SNAPSHOT_VERSION};
use crate::scaling::FeatureScaler;
use crate::tuning;

/// Trained state, committed as a unit after a successful fit.
#[derive(Debug, Clone)]
struct TrainedState {
    scaler: FeatureScaler,
    svm: FittedSvm,
}

/// RBF SVM classifier with per-session min/max scaling and grid-search
/// hyperparameter tuning. A failed retrain keeps the previous model.
pub struct SvmClassifier {
    config: ClassifierConfig,
    state: Option<TrainedState>,
}

impl SvmClassifier {
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    pub fn with_config(config: ClassifierConfig) -> Self {
        Self {
            config,
            state: None,
        }
    }

    /// Write the trained model to a versioned JSON snapshot.
    pub fn save(&self, path: &Path) -> ProspectResult<()> {
        let state = self.trained()?;
        let snapshot = ModelSnapshot {
            version: SNAPSHOT_VERSION,
            scaler: state.scaler.clone(),
            svm: state.svm.clone(),
        };
        let json = serde_json::to_string(&snapshot)?;
        fs::write(path, json)?;
        info!(path = %path.display(), "saved model snapshot");
        Ok(())
    }

    /// Load a snapshot written by [`SvmClassifier::save`], replacing any
    /// trained state. Rejects snapshots from a different format version.
    pub fn load(&mut self, path: &Path) -> ProspectResult<()> {
        let json = fs::read_to_string(path)?;
        let snapshot: ModelSnapshot = serde_json::from_str(&json)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(ClassifierError::SnapshotVersionMismatch {
                expected: SNAPSHOT_VERSION,
                found: snapshot.version,
            }
            .into());
        }
        self.state = Some(TrainedState {
            scaler: snapshot.scaler,
            svm: snapshot.svm,
        });
        info!(path = %path.display(), "loaded model snapshot");
        Ok(())
    }

    fn trained(&self) -> ProspectResult<&TrainedState> {
        self.state
            .as_ref()
            .ok_or_else(|| ClassifierError::NotTrained.into())
    }
}

impl Default for SvmClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl IClassifier for SvmClassifier {
    fn train(&mut self, patches: &[Patch]) -> ProspectResult<()> {
        validate_training_set(patches)?;

        let rows: Vec<Vec<f64>> = patches
            .iter()
            .map(|patch| patch.features.to_values())
            .collect();
        let labels: Vec<bool> = patches
            .iter()
            .map(|patch| patch.label == Label::Relevant)
            .collect();

        let scaler =
            FeatureScaler::fit(&rows, self.config.scale_lower, self.config.scale_upper)?;
        let scaled: Vec<Vec<f64>> = rows
            .iter()
            .map(|row| scaler.transform(row))
            .collect::<ProspectResult<_>>()?;

        let tuned = tuning::grid_search(&scaled, &labels, &self.config);
        debug!(
            cost = tuned.cost,
            gamma = tuned.gamma,
            accuracy = tuned.accuracy,
            "grid search finished"
        );

        let svm = model::fit_svm(&scaled, &labels, tuned.cost, tuned.gamma)?;
        info!(
            samples = patches.len(),
            support = svm.alpha.iter().filter(|a| **a != 0.0).count(),
            "trained classifier"
        );

        self.state = Some(TrainedState { scaler, svm });
        Ok(())
    }

    fn decision_value(&self, patch: &Patch) -> ProspectResult<f64> {
        let state = self.trained()?;
        let scaled = state.scaler.transform(&patch.features.to_values())?;
        Ok(state.svm.decision(&scaled))
    }

    fn kernel(&self, a: &Patch, b: &Patch) -> ProspectResult<f64> {
        let state = self.trained()?;
        let scaled_a = state.scaler.transform(&a.features.to_values())?;
        let scaled_b = state.scaler.transform(&b.features.to_values())?;
        Ok(state.svm.kernel.evaluate(&scaled_a, &scaled_b))
    }

    fn is_trained(&self) -> bool {
        self.state.is_some()
    }
}

fn validate_training_set(patches: &[Patch]) -> ProspectResult<()> {
    if patches.is_empty() {
        return Err(ClassifierError::InvalidTrainingData {
            reason: "training set is empty".into(),
        }
        .into());
    }

    let dim = patches[0].features.len();
    let mut relevant = 0usize;
    let mut irrelevant = 0usize;
    for patch in patches {
        if patch.features.len() != dim {
            return Err(ClassifierError::DimensionMismatch {
                expected: dim,
                actual: patch.features.len(),
            }
            .into());
        }
        if patch.features.has_non_finite() {
            return Err(ClassifierError::InvalidTrainingData {
                reason: format!("patch {} has a non-finite feature", patch.id),
            }
            .into());
        }
        match patch.label {
            Label::Relevant => relevant += 1,
            Label::Irrelevant => irrelevant += 1,
            Label::Unlabeled => {
                return Err(ClassifierError::InvalidTrainingData {
                    reason: format!("patch {} is unlabeled", patch.id),
                }
                .into())
            }
        }
    }

    if relevant == 0 || irrelevant == 0 {
        return Err(ClassifierError::InvalidTrainingData {
            reason: "training set must contain both relevant and irrelevant patches".into(),
        }
        .into());
    }
    Ok(())
}
