//! Scripted feedback session against a synthetic patch archive.
//!
//! Seeds the engine with a handful of relevant query patches, pools an
//! archive of candidates, answers three feedback rounds with a
//! ground-truth oracle, then scores the whole archive and prints the top
//! hits.
//!
//! Run: cargo run -p prospect-learning --example feedback_session

use prospect_core::patch::{FeatureVector, Label, Patch, PatchId};
use prospect_learning::ActiveLearningEngine;

/// Ground truth: patches from the "bright" corner of feature space are
/// the ones the user is hunting for.
fn oracle_label(patch: &Patch) -> Label {
    let values = patch.features.to_values();
    if values[0] + values[1] > 1.4 {
        Label::Relevant
    } else {
        Label::Irrelevant
    }
}

/// Deterministic pseudo-random archive, no external RNG needed.
fn synthetic_archive(size: u64) -> Vec<Patch> {
    let mut state = 0x2545f4914f6cdd1du64;
    (0..size)
        .map(|i| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let x = (state >> 40) as f64 / (1u64 << 24) as f64;
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let y = (state >> 40) as f64 / (1u64 << 24) as f64;
            Patch::new(PatchId(1000 + i), FeatureVector::from_values(&[x, y]))
        })
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut engine = ActiveLearningEngine::new();

    // The user marks a few patches that look right.
    let query: Vec<Patch> = (0..5u64)
        .map(|i| {
            Patch::labeled(
                PatchId(i),
                FeatureVector::from_values(&[0.85 + 0.02 * i as f64, 0.9]),
                Label::Relevant,
            )
        })
        .collect();
    engine.set_query_patches(&query)?;

    // The archive supplies random candidates; the farthest become the
    // bootstrap negatives.
    engine.set_random_patches(synthetic_archive(400))?;
    println!(
        "bootstrap: {} training patches, {} pooled candidates",
        engine.training_data().len(),
        engine.pool_size()
    );

    for round in 1..=3 {
        let mut batch = engine.most_ambiguous_patches(4)?;
        if batch.is_empty() {
            println!("round {round}: pool exhausted");
            break;
        }
        for patch in &mut batch {
            patch.label = oracle_label(patch);
        }
        engine.train(batch)?;
        println!(
            "round {round}: training set now {} patches",
            engine.training_data().len()
        );
    }

    // Score a fresh view of the archive and show the best matches.
    let mut archive = synthetic_archive(400);
    engine.classify(&mut archive)?;
    archive.sort_by(|a, b| {
        b.decision
            .unwrap_or(f64::NEG_INFINITY)
            .total_cmp(&a.decision.unwrap_or(f64::NEG_INFINITY))
    });

    println!("top matches:");
    for patch in archive.iter().take(10) {
        let values = patch.features.to_values();
        println!(
            "  {} ({:.3}, {:.3})  decision {:+.3}  {}",
            patch.id,
            values[0],
            values[1],
            patch.decision.unwrap_or(0.0),
            patch.label
        );
    }

    Ok(())
}
