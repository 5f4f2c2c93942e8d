//! Patch data model: identifiers, feature vectors, and relevance labels.

mod base;
mod label;
mod vector;

pub use base::{Patch, PatchId};
pub use label::Label;
pub use vector::{Feature, FeatureVector};
