//! # prospect-classifier
//!
//! Binary margin classifier for patch relevance: min/max feature scaling →
//! k-fold grid search over (cost, gamma) → RBF SVM fit. The fitted model is
//! held as plain dual coefficients so classification, kernel evaluation,
//! and snapshot persistence stay in-crate.

pub mod kernel;
pub mod model;
pub mod scaling;
pub mod svm;

mod tuning;

pub use kernel::RbfKernel;
pub use model::{FittedSvm, ModelSnapshot, SNAPSHOT_VERSION};
pub use scaling::FeatureScaler;
pub use svm::SvmClassifier;
