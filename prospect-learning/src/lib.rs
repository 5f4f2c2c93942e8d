//! # prospect-learning
//!
//! Active-learning loop for content-based patch retrieval: uncertainty
//! sampling near the decision boundary, kernel k-means diversity
//! clustering, and the session engine sequencing query → label → retrain
//! rounds.

pub mod engine;
pub mod kernel_kmeans;
pub mod session;
pub mod sets;
pub mod uncertainty;

pub use engine::ActiveLearningEngine;
pub use session::SessionState;
pub use sets::{CandidatePool, TrainingSet};
