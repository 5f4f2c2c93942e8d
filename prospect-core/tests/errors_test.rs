use prospect_core::errors::*;
use prospect_core::patch::PatchId;

#[test]
fn classifier_error_dimension_mismatch_carries_values() {
    let err = ClassifierError::DimensionMismatch {
        expected: 6,
        actual: 4,
    };
    let msg = err.to_string();
    assert!(msg.contains('6'));
    assert!(msg.contains('4'));
}

#[test]
fn classifier_error_invalid_training_data_carries_reason() {
    let err = ClassifierError::InvalidTrainingData {
        reason: "single-class set".into(),
    };
    assert!(err.to_string().contains("single-class set"));
}

#[test]
fn classifier_error_snapshot_version_mismatch_carries_versions() {
    let err = ClassifierError::SnapshotVersionMismatch {
        expected: 1,
        found: 9,
    };
    let msg = err.to_string();
    assert!(msg.contains('1'));
    assert!(msg.contains('9'));
}

#[test]
fn learning_error_unlabeled_patch_carries_id() {
    let err = LearningError::UnlabeledPatch {
        patch: PatchId(4711),
    };
    assert!(err.to_string().contains("4711"));
}

#[test]
fn learning_error_diversity_mismatch_carries_counts() {
    let err = LearningError::DiversityMismatch {
        requested: 5,
        produced: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains('5'));
    assert!(msg.contains('3'));
}

// --- From impls ---

#[test]
fn classifier_error_converts_to_prospect_error() {
    let sub = ClassifierError::NotTrained;
    let err: ProspectError = sub.into();
    assert!(matches!(err, ProspectError::ClassifierError(_)));
}

#[test]
fn learning_error_converts_to_prospect_error() {
    let sub = LearningError::MissingQuerySet;
    let err: ProspectError = sub.into();
    assert!(matches!(err, ProspectError::LearningError(_)));
}

#[test]
fn serialization_error_converts_to_prospect_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: ProspectError = json_err.into();
    assert!(matches!(err, ProspectError::SerializationError(_)));
}

#[test]
fn io_error_converts_to_prospect_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing snapshot");
    let err: ProspectError = io_err.into();
    assert!(matches!(err, ProspectError::IoError(_)));
}
