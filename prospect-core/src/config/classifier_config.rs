use serde::{Deserialize, Serialize};

use super::defaults;

/// Classifier subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Cross-validation folds used by the grid search. Clamped to the
    /// training-set size at train time.
    pub folds: usize,
    /// Lower bound features are scaled onto.
    pub scale_lower: f64,
    /// Upper bound features are scaled onto.
    pub scale_upper: f64,
    /// Candidate SVM cost values, searched in order.
    pub cost_grid: Vec<f64>,
    /// Candidate RBF gamma values, searched in order.
    pub gamma_grid: Vec<f64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            folds: defaults::DEFAULT_FOLDS,
            scale_lower: defaults::DEFAULT_SCALE_LOWER,
            scale_upper: defaults::DEFAULT_SCALE_UPPER,
            cost_grid: defaults::default_cost_grid(),
            gamma_grid: defaults::default_gamma_grid(),
        }
    }
}
