use serde::{Deserialize, Serialize};

use super::defaults;

/// Active-learning loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Feedback rounds that use the margin scan before switching to pure
    /// distance ranking.
    pub initial_rounds: usize,
    /// Uncertain candidates gathered per requested representative, so a
    /// request for `n` patches clusters `n * candidate_multiplier`
    /// candidates.
    pub candidate_multiplier: usize,
    /// Pool patches farthest from the query centroid that are auto-labeled
    /// irrelevant to form the first two-class training set.
    pub bootstrap_negatives: usize,
    /// Iteration cap for the kernel k-means clusterer.
    pub max_kmeans_iterations: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            initial_rounds: defaults::DEFAULT_INITIAL_ROUNDS,
            candidate_multiplier: defaults::DEFAULT_CANDIDATE_MULTIPLIER,
            bootstrap_negatives: defaults::DEFAULT_BOOTSTRAP_NEGATIVES,
            max_kmeans_iterations: defaults::DEFAULT_MAX_KMEANS_ITERATIONS,
        }
    }
}
