//! Diversity clustering in the classifier's kernel space.
//!
//! Plain k-means cannot run here: the only geometry shared with the
//! classifier is its kernel, so centroid coordinates are never
//! materialized. The squared distance from a point to a cluster centroid
//! expands to
//! `k(x,x) - (2/|C|) * sum k(x,z) + (1/|C|^2) * sum sum k(z,z')`
//! over the cluster members `z`.

use std::collections::HashSet;

use prospect_core::errors::{LearningError, ProspectResult};
use prospect_core::patch::{Patch, PatchId};
use prospect_core::traits::IClassifier;
use tracing::debug;

/// Cluster the points into `clusters` groups and return one
/// representative id per group: the member nearest its own cluster
/// centroid. At most `points.len()` clusters are formed, so a short
/// input yields a short result.
pub fn representatives(
    points: &[&Patch],
    clusters: usize,
    classifier: &dyn IClassifier,
    max_iterations: usize,
) -> ProspectResult<Vec<PatchId>> {
    let n = points.len();
    let h = clusters.min(n);
    if h == 0 {
        return Ok(Vec::new());
    }

    let gram = gram_matrix(points, classifier)?;

    // Deterministic round-robin seeding keeps every run reproducible.
    let mut assignments: Vec<usize> = (0..n).map(|i| i % h).collect();

    for _ in 0..max_iterations {
        let stats = ClusterStats::compute(&gram, &assignments, h);
        let mut changed = false;
        for i in 0..n {
            let best = stats.nearest_cluster(&gram, i);
            if best != assignments[i] {
                assignments[i] = best;
                changed = true;
            }
        }
        repair_empty_clusters(&gram, &mut assignments, h);
        if !changed {
            break;
        }
    }

    let stats = ClusterStats::compute(&gram, &assignments, h);
    let mut reps = Vec::with_capacity(h);
    for cluster in 0..h {
        let mut nearest: Option<(usize, f64)> = None;
        for &i in &stats.members[cluster] {
            let distance = stats.distance(&gram, i, cluster);
            if nearest.map_or(true, |(_, best)| distance < best) {
                nearest = Some((i, distance));
            }
        }
        if let Some((i, _)) = nearest {
            reps.push(points[i].id);
        }
    }

    // Duplicate ids in the input collapse the representative set, which
    // breaks the one-per-cluster contract.
    let distinct: HashSet<PatchId> = reps.iter().copied().collect();
    if reps.len() != h || distinct.len() != h {
        return Err(LearningError::DiversityMismatch {
            requested: h,
            produced: distinct.len(),
        }
        .into());
    }

    debug!(clusters = h, points = n, "selected diversity representatives");
    Ok(reps)
}

/// Per-cluster membership and the centroid self-similarity term.
struct ClusterStats {
    members: Vec<Vec<usize>>,
    self_term: Vec<f64>,
}

impl ClusterStats {
    fn compute(gram: &[Vec<f64>], assignments: &[usize], clusters: usize) -> Self {
        let mut members = vec![Vec::new(); clusters];
        for (i, &cluster) in assignments.iter().enumerate() {
            members[cluster].push(i);
        }
        let self_term = members
            .iter()
            .map(|member_ids| {
                if member_ids.is_empty() {
                    return 0.0;
                }
                let mut sum = 0.0;
                for &a in member_ids {
                    for &b in member_ids {
                        sum += gram[a][b];
                    }
                }
                sum / (member_ids.len() * member_ids.len()) as f64
            })
            .collect();
        Self { members, self_term }
    }

    /// Squared kernel-space distance from point `i` to the centroid of
    /// `cluster`. Empty clusters are infinitely far so nothing joins them
    /// during reassignment.
    fn distance(&self, gram: &[Vec<f64>], i: usize, cluster: usize) -> f64 {
        let member_ids = &self.members[cluster];
        if member_ids.is_empty() {
            return f64::INFINITY;
        }
        let cross: f64 = member_ids.iter().map(|&z| gram[i][z]).sum();
        gram[i][i] - 2.0 * cross / member_ids.len() as f64 + self.self_term[cluster]
    }

    /// Ties go to the lower cluster index.
    fn nearest_cluster(&self, gram: &[Vec<f64>], i: usize) -> usize {
        let mut best = 0;
        let mut best_distance = f64::INFINITY;
        for cluster in 0..self.members.len() {
            let distance = self.distance(gram, i, cluster);
            if distance < best_distance {
                best = cluster;
                best_distance = distance;
            }
        }
        best
    }
}

/// Reassignment can drain a cluster. Refill each empty one with the
/// farthest member of the largest cluster so exactly `clusters` groups
/// survive; with `points >= clusters` a donor with at least two members
/// always exists.
fn repair_empty_clusters(gram: &[Vec<f64>], assignments: &mut [usize], clusters: usize) {
    loop {
        let stats = ClusterStats::compute(gram, assignments, clusters);
        let empty = match (0..clusters).find(|&c| stats.members[c].is_empty()) {
            Some(c) => c,
            None => return,
        };
        let donor = match (0..clusters).max_by_key(|&c| stats.members[c].len()) {
            Some(c) => c,
            None => return,
        };
        let farthest = stats.members[donor].iter().copied().max_by(|&a, &b| {
            stats
                .distance(gram, a, donor)
                .total_cmp(&stats.distance(gram, b, donor))
        });
        match farthest {
            Some(i) => assignments[i] = empty,
            None => return,
        }
    }
}

fn gram_matrix(points: &[&Patch], classifier: &dyn IClassifier) -> ProspectResult<Vec<Vec<f64>>> {
    let n = points.len();
    let mut gram = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i..n {
            let similarity = classifier.kernel(points[i], points[j])?;
            gram[i][j] = similarity;
            gram[j][i] = similarity;
        }
    }
    Ok(gram)
}
