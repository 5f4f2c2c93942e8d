//! Default values backing the config structs.

/// Cross-validation folds for hyperparameter grid search.
pub const DEFAULT_FOLDS: usize = 5;

/// Lower bound of the scaled feature range.
pub const DEFAULT_SCALE_LOWER: f64 = 0.0;

/// Upper bound of the scaled feature range.
pub const DEFAULT_SCALE_UPPER: f64 = 1.0;

/// Feedback rounds during which the margin scan is used for uncertainty
/// selection before switching to pure ranking.
pub const DEFAULT_INITIAL_ROUNDS: usize = 3;

/// Uncertain candidates gathered per requested representative.
pub const DEFAULT_CANDIDATE_MULTIPLIER: usize = 4;

/// Pool patches auto-labeled irrelevant to bootstrap the first model.
pub const DEFAULT_BOOTSTRAP_NEGATIVES: usize = 10;

/// Iteration cap for the kernel k-means clusterer.
pub const DEFAULT_MAX_KMEANS_ITERATIONS: usize = 10;

/// Grid of candidate SVM cost values (powers of two).
pub fn default_cost_grid() -> Vec<f64> {
    vec![0.125, 1.0, 8.0, 64.0]
}

/// Grid of candidate RBF gamma values (powers of two).
pub fn default_gamma_grid() -> Vec<f64> {
    vec![0.03125, 0.125, 0.5, 2.0]
}
