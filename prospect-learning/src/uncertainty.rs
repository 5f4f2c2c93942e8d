//! Uncertainty sampling near the decision boundary.

use prospect_core::constants::MARGIN_RADIUS;
use prospect_core::errors::ProspectResult;
use prospect_core::patch::Patch;
use prospect_core::traits::IClassifier;
use tracing::debug;

/// Pick the candidates the current model is least sure about.
///
/// Early rounds scan the margin: candidates whose functional distance
/// (|decision|) falls inside the SVM margin are taken in pool order,
/// capped at `quota`. When the margin scan comes up short, or once
/// `initial_rounds` feedback rounds have completed, candidates are
/// instead ranked by ascending functional distance (stable, so ties keep
/// pool order) and the first `quota` are taken. Returning fewer than
/// `quota` candidates is normal for a small pool.
pub fn select<'a>(
    candidates: &'a [Patch],
    classifier: &dyn IClassifier,
    quota: usize,
    iteration: usize,
    initial_rounds: usize,
) -> ProspectResult<Vec<&'a Patch>> {
    if quota == 0 || candidates.is_empty() {
        return Ok(Vec::new());
    }

    let mut distances = Vec::with_capacity(candidates.len());
    for patch in candidates {
        distances.push(classifier.decision_value(patch)?.abs());
    }

    if iteration < initial_rounds {
        let in_margin: Vec<&Patch> = candidates
            .iter()
            .zip(&distances)
            .filter(|&(_, &distance)| distance < MARGIN_RADIUS)
            .map(|(patch, _)| patch)
            .take(quota)
            .collect();
        if in_margin.len() == quota {
            debug!(selected = in_margin.len(), phase = "margin", "selected uncertain candidates");
            return Ok(in_margin);
        }
    }

    let mut order: Vec<usize> = (0..candidates.len()).collect();
    order.sort_by(|&a, &b| distances[a].total_cmp(&distances[b]));
    let ranked: Vec<&Patch> = order
        .into_iter()
        .take(quota)
        .map(|i| &candidates[i])
        .collect();
    debug!(selected = ranked.len(), phase = "ranked", "selected uncertain candidates");
    Ok(ranked)
}
