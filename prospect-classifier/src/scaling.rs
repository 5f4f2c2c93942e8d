//! Per-feature linear scaling onto a fixed range.

use prospect_core::errors::{ClassifierError, ProspectResult};
use serde::{Deserialize, Serialize};

/// Linear min/max scaler fitted on training data and applied to every
/// vector the model later sees. Values outside the training range
/// extrapolate past the bounds; clamping would collapse the distances the
/// selectors depend on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    lower: f64,
    upper: f64,
    mins: Vec<f64>,
    maxs: Vec<f64>,
}

impl FeatureScaler {
    /// Fit per-feature bounds from training rows.
    pub fn fit(rows: &[Vec<f64>], lower: f64, upper: f64) -> ProspectResult<Self> {
        let dim = match rows.first() {
            Some(row) => row.len(),
            None => {
                return Err(ClassifierError::InvalidTrainingData {
                    reason: "cannot fit scaler on an empty set".into(),
                }
                .into())
            }
        };

        let mut mins = vec![f64::INFINITY; dim];
        let mut maxs = vec![f64::NEG_INFINITY; dim];
        for row in rows {
            if row.len() != dim {
                return Err(ClassifierError::DimensionMismatch {
                    expected: dim,
                    actual: row.len(),
                }
                .into());
            }
            for (j, &value) in row.iter().enumerate() {
                mins[j] = mins[j].min(value);
                maxs[j] = maxs[j].max(value);
            }
        }

        Ok(Self {
            lower,
            upper,
            mins,
            maxs,
        })
    }

    /// Number of features the scaler was fitted on.
    pub fn dimensions(&self) -> usize {
        self.mins.len()
    }

    /// Map one row into the scaled range.
    pub fn transform(&self, row: &[f64]) -> ProspectResult<Vec<f64>> {
        if row.len() != self.dimensions() {
            return Err(ClassifierError::DimensionMismatch {
                expected: self.dimensions(),
                actual: row.len(),
            }
            .into());
        }

        let span = self.upper - self.lower;
        let scaled = row
            .iter()
            .enumerate()
            .map(|(j, &value)| {
                let range = self.maxs[j] - self.mins[j];
                if range == 0.0 {
                    // Degenerate feature: every training value was identical.
                    self.lower
                } else {
                    self.lower + span * (value - self.mins[j]) / range
                }
            })
            .collect();
        Ok(scaled)
    }
}
