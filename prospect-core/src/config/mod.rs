//! Configuration structs with serde defaults.

pub mod defaults;

mod classifier_config;
mod learning_config;

pub use classifier_config::ClassifierConfig;
pub use learning_config::LearningConfig;
