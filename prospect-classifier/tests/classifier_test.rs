//! Model snapshot tests: save/load round-trips, version gating, and
//! decision stability across persistence.
//!
//! These tests write real snapshot files into a tempdir and verify a
//! reloaded classifier reproduces the saved one bit for bit.

use prospect_classifier::{ModelSnapshot, SvmClassifier, SNAPSHOT_VERSION};
use prospect_core::config::ClassifierConfig;
use prospect_core::errors::ProspectError;
use prospect_core::patch::{FeatureVector, Label, Patch, PatchId};
use prospect_core::traits::IClassifier;

fn make_patch(id: u64, values: &[f64], label: Label) -> Patch {
    Patch::labeled(PatchId(id), FeatureVector::from_values(values), label)
}

fn make_training_set() -> Vec<Patch> {
    let mut patches = Vec::new();
    for i in 0..8u64 {
        let offset = 0.02 * i as f64;
        patches.push(make_patch(i, &[0.85 + offset, 0.9 - offset], Label::Relevant));
        patches.push(make_patch(
            100 + i,
            &[0.05 + offset, 0.1 + offset],
            Label::Irrelevant,
        ));
    }
    patches
}

fn make_probes() -> Vec<Patch> {
    vec![
        make_patch(500, &[0.9, 0.85], Label::Unlabeled),
        make_patch(501, &[0.1, 0.15], Label::Unlabeled),
        make_patch(502, &[0.5, 0.5], Label::Unlabeled),
        make_patch(503, &[1.4, -0.2], Label::Unlabeled),
    ]
}

fn trained_classifier() -> SvmClassifier {
    let config = ClassifierConfig {
        folds: 4,
        cost_grid: vec![1.0, 10.0],
        gamma_grid: vec![0.5, 2.0],
        ..ClassifierConfig::default()
    };
    let mut classifier = SvmClassifier::with_config(config);
    classifier.train(&make_training_set()).unwrap();
    classifier
}

// ═══════════════════════════════════════════════════════════════════════════
// ROUND TRIP: a reloaded model decides exactly like the saved one
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn reloaded_model_reproduces_decisions_bit_for_bit() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let classifier = trained_classifier();
    let before: Vec<f64> = make_probes()
        .iter()
        .map(|patch| classifier.decision_value(patch).unwrap())
        .collect();

    classifier.save(&path).unwrap();

    let mut restored = SvmClassifier::new();
    assert!(!restored.is_trained());
    restored.load(&path).unwrap();
    assert!(restored.is_trained());

    let after: Vec<f64> = make_probes()
        .iter()
        .map(|patch| restored.decision_value(patch).unwrap())
        .collect();

    for (a, b) in before.iter().zip(&after) {
        assert_eq!(
            a.to_bits(),
            b.to_bits(),
            "decision values must survive persistence exactly"
        );
    }
}

#[test]
fn reloaded_model_assigns_the_same_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let classifier = trained_classifier();
    classifier.save(&path).unwrap();

    let mut restored = SvmClassifier::new();
    restored.load(&path).unwrap();

    for patch in make_probes() {
        let original = classifier.classify(&patch).unwrap();
        let reloaded = restored.classify(&patch).unwrap();
        assert_eq!(original.label, reloaded.label);
        assert_eq!(original.decision.to_bits(), reloaded.decision.to_bits());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// REJECTION: unusable snapshots fail with typed errors
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn saving_an_untrained_classifier_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let classifier = SvmClassifier::new();
    let err = classifier.save(&path).unwrap_err();
    assert!(matches!(err, ProspectError::ClassifierError(_)));
    assert!(!path.exists(), "no file should be written on failure");
}

#[test]
fn version_mismatch_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");

    let classifier = trained_classifier();
    classifier.save(&path).unwrap();

    // Rewrite the snapshot with a bumped version field.
    let json = std::fs::read_to_string(&path).unwrap();
    let mut snapshot: ModelSnapshot = serde_json::from_str(&json).unwrap();
    snapshot.version = SNAPSHOT_VERSION + 1;
    std::fs::write(&path, serde_json::to_string(&snapshot).unwrap()).unwrap();

    let mut restored = SvmClassifier::new();
    let err = restored.load(&path).unwrap_err();
    assert!(err.to_string().contains("version mismatch"));
    assert!(!restored.is_trained());
}

#[test]
fn malformed_snapshot_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "{ not json").unwrap();

    let mut restored = SvmClassifier::new();
    let err = restored.load(&path).unwrap_err();
    assert!(matches!(err, ProspectError::SerializationError(_)));
}

#[test]
fn missing_snapshot_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let mut restored = SvmClassifier::new();
    let err = restored.load(&path).unwrap_err();
    assert!(matches!(err, ProspectError::IoError(_)));
}
