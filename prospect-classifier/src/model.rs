//! Fitted model representation, solver glue, and snapshot format.

use linfa::prelude::*;
use linfa_svm::Svm;
use ndarray::{Array1, Array2};
use prospect_core::errors::{ClassifierError, ProspectResult};
use serde::{Deserialize, Serialize};

use crate::kernel::RbfKernel;
use crate::scaling::FeatureScaler;

/// Current snapshot format version. Bump on any incompatible change to
/// [`ModelSnapshot`].
pub const SNAPSHOT_VERSION: u32 = 1;

/// Dual-form SVM model extracted from the solver.
///
/// `alpha` holds the signed dual coefficients parallel to `support` (the
/// scaled training rows); most entries are zero for non-support rows. The
/// decision function is `sum(alpha_i * k(support_i, x)) - rho`, positive
/// for the relevant class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedSvm {
    pub kernel: RbfKernel,
    pub cost: f64,
    pub alpha: Vec<f64>,
    pub support: Vec<Vec<f64>>,
    pub rho: f64,
}

impl FittedSvm {
    /// Decision value for one scaled row.
    pub fn decision(&self, scaled: &[f64]) -> f64 {
        let weighted: f64 = self
            .alpha
            .iter()
            .zip(&self.support)
            .map(|(alpha, row)| alpha * self.kernel.evaluate(row, scaled))
            .sum();
        weighted - self.rho
    }
}

/// Fit a two-class SVM on scaled rows. `true` targets are the relevant
/// class and come out positive under the decision function.
pub(crate) fn fit_svm(
    rows: &[Vec<f64>],
    labels: &[bool],
    cost: f64,
    gamma: f64,
) -> ProspectResult<FittedSvm> {
    let n = rows.len();
    let dim = rows.first().map(|row| row.len()).unwrap_or(0);
    let mut flat = Vec::with_capacity(n * dim);
    for row in rows {
        flat.extend_from_slice(row);
    }
    let records = Array2::from_shape_vec((n, dim), flat).map_err(|e| {
        ClassifierError::TrainingFailed {
            reason: e.to_string(),
        }
    })?;
    let targets = Array1::from_vec(labels.to_vec());
    let dataset = Dataset::new(records, targets);

    // linfa's Gaussian kernel is exp(-d^2 / eps) while ours is
    // exp(-gamma * d^2); pass eps = 1/gamma so both live in the same space.
    let eps = 1.0 / gamma;
    let svm = Svm::<_, bool>::params()
        .pos_neg_weights(cost, cost)
        .gaussian_kernel(eps)
        .fit(&dataset)
        .map_err(|e| ClassifierError::TrainingFailed {
            reason: e.to_string(),
        })?;

    Ok(FittedSvm {
        kernel: RbfKernel::new(gamma),
        cost,
        alpha: svm.alpha.clone(),
        rho: svm.rho,
        support: rows.to_vec(),
    })
}

/// Versioned on-disk model snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub version: u32,
    pub scaler: FeatureScaler,
    pub svm: FittedSvm,
}
