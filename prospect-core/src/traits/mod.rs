//! Trait boundaries between the workspace crates.

mod classifier;

pub use classifier::{Classification, IClassifier};
