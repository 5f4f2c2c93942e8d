use proptest::prelude::*;
use prospect_core::errors::ProspectResult;
use prospect_core::patch::{FeatureVector, Patch, PatchId};
use prospect_core::traits::IClassifier;
use prospect_learning::{kernel_kmeans, uncertainty};

/// Deterministic stand-in for a trained model: the decision value is the
/// patch's first feature and the kernel is an RBF over raw features.
struct ScriptedClassifier;

impl IClassifier for ScriptedClassifier {
    fn train(&mut self, _patches: &[Patch]) -> ProspectResult<()> {
        Ok(())
    }

    fn decision_value(&self, patch: &Patch) -> ProspectResult<f64> {
        Ok(patch.features.to_values()[0])
    }

    fn kernel(&self, a: &Patch, b: &Patch) -> ProspectResult<f64> {
        Ok((-a.features.squared_distance(&b.features)).exp())
    }

    fn is_trained(&self) -> bool {
        true
    }
}

fn make_pool(decisions: &[f64]) -> Vec<Patch> {
    decisions
        .iter()
        .enumerate()
        .map(|(i, &decision)| {
            Patch::new(PatchId(i as u64), FeatureVector::from_values(&[decision]))
        })
        .collect()
}

// ── Uncertainty selection never overruns the quota or the pool ───────────

proptest! {
    #[test]
    fn selection_respects_quota_and_pool(
        decisions in prop::collection::vec(-3.0f64..3.0, 0..60),
        quota in 0usize..24,
        iteration in 0usize..6,
    ) {
        let pool = make_pool(&decisions);
        let picked = uncertainty::select(&pool, &ScriptedClassifier, quota, iteration, 3).unwrap();

        prop_assert!(picked.len() <= quota);
        prop_assert!(picked.len() <= pool.len());

        let mut ids: Vec<u64> = picked.iter().map(|patch| patch.id.0).collect();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), picked.len(), "no candidate selected twice");
    }
}

// ── Ranked selection is sorted by functional distance ────────────────────

proptest! {
    #[test]
    fn ranked_phase_orders_by_ascending_distance(
        decisions in prop::collection::vec(-3.0f64..3.0, 1..60),
        quota in 1usize..24,
    ) {
        let pool = make_pool(&decisions);
        // Iteration past the margin-scan window forces the ranked path.
        let picked = uncertainty::select(&pool, &ScriptedClassifier, quota, 10, 3).unwrap();

        let distances: Vec<f64> = picked
            .iter()
            .map(|patch| patch.features.to_values()[0].abs())
            .collect();
        for pair in distances.windows(2) {
            prop_assert!(
                pair[0] <= pair[1],
                "ranked selection out of order: {} > {}",
                pair[0],
                pair[1]
            );
        }
    }
}

// ── Diversity clustering returns min(h, n) distinct pool members ─────────

proptest! {
    #[test]
    fn representatives_are_distinct_pool_members(
        values in prop::collection::vec((-5.0f64..5.0, -5.0f64..5.0), 0..40),
        clusters in 1usize..8,
    ) {
        let patches: Vec<Patch> = values
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| {
                Patch::new(PatchId(i as u64), FeatureVector::from_values(&[x, y]))
            })
            .collect();
        let refs: Vec<&Patch> = patches.iter().collect();

        let reps = kernel_kmeans::representatives(
            &refs,
            clusters,
            &ScriptedClassifier,
            10,
        ).unwrap();

        prop_assert_eq!(reps.len(), clusters.min(patches.len()));

        let mut unique: Vec<PatchId> = reps.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), reps.len(), "representatives must be distinct");

        for id in &reps {
            prop_assert!(patches.iter().any(|patch| patch.id == *id));
        }
    }
}

// ── Clustering is deterministic for a fixed input ────────────────────────

proptest! {
    #[test]
    fn clustering_is_reproducible(
        values in prop::collection::vec(-5.0f64..5.0, 1..30),
        clusters in 1usize..6,
    ) {
        let patches = make_pool(&values);
        let refs: Vec<&Patch> = patches.iter().collect();

        let first = kernel_kmeans::representatives(&refs, clusters, &ScriptedClassifier, 10).unwrap();
        let second = kernel_kmeans::representatives(&refs, clusters, &ScriptedClassifier, 10).unwrap();
        prop_assert_eq!(first, second);
    }
}
