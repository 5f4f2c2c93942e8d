//! # prospect-core
//!
//! Foundation crate for the Prospect active-learning retrieval system.
//! Defines the patch data model, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod patch;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ClassifierConfig, LearningConfig};
pub use errors::{ClassifierError, LearningError, ProspectError, ProspectResult};
pub use patch::{Feature, FeatureVector, Label, Patch, PatchId};
pub use traits::{Classification, IClassifier};
