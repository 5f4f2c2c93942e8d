/// Classifier subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("classifier has not been trained")]
    NotTrained,

    #[error("invalid training data: {reason}")]
    InvalidTrainingData { reason: String },

    #[error("training failed: {reason}")]
    TrainingFailed { reason: String },

    #[error("feature dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("model snapshot version mismatch: expected {expected}, found {found}")]
    SnapshotVersionMismatch { expected: u32, found: u32 },
}
