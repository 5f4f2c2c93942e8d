//! Error types for the Prospect workspace.
//!
//! Each subsystem has its own error enum; `ProspectError` unifies them at
//! the crate boundary so callers handle a single type.

mod classifier_error;
mod learning_error;

pub use classifier_error::ClassifierError;
pub use learning_error::LearningError;

/// Unified error type for the whole workspace.
#[derive(Debug, thiserror::Error)]
pub enum ProspectError {
    #[error("classifier error: {0}")]
    ClassifierError(#[from] ClassifierError),

    #[error("learning error: {0}")]
    LearningError(#[from] LearningError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result alias used across the workspace.
pub type ProspectResult<T> = Result<T, ProspectError>;
