//! Hyperparameter grid search with k-fold cross-validation.

use prospect_core::config::ClassifierConfig;
use tracing::debug;

use crate::model;

/// Winning grid point and its pooled validation accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TunedParams {
    pub cost: f64,
    pub gamma: f64,
    pub accuracy: f64,
}

/// Search the (cost, gamma) grid by round-robin k-fold cross-validation.
/// Earlier grid points win ties. Candidates where no fold produces a
/// usable fit are skipped; if nothing evaluates at all, the grid
/// midpoints are returned with zero accuracy so training can proceed.
pub(crate) fn grid_search(
    rows: &[Vec<f64>],
    labels: &[bool],
    config: &ClassifierConfig,
) -> TunedParams {
    let folds = config.folds.clamp(2, rows.len().max(2));
    let mut best: Option<TunedParams> = None;

    for &cost in &config.cost_grid {
        for &gamma in &config.gamma_grid {
            let accuracy = match cross_validate(rows, labels, folds, cost, gamma) {
                Some(accuracy) => accuracy,
                None => continue,
            };
            debug!(cost, gamma, accuracy, "evaluated grid point");
            if best.map_or(true, |b| accuracy > b.accuracy) {
                best = Some(TunedParams {
                    cost,
                    gamma,
                    accuracy,
                });
            }
        }
    }

    best.unwrap_or_else(|| TunedParams {
        cost: midpoint(&config.cost_grid, 1.0),
        gamma: midpoint(&config.gamma_grid, 0.5),
        accuracy: 0.0,
    })
}

/// Pooled holdout accuracy across folds, or `None` when no fold produced
/// a usable fit (single-class training partitions, solver failures).
fn cross_validate(
    rows: &[Vec<f64>],
    labels: &[bool],
    folds: usize,
    cost: f64,
    gamma: f64,
) -> Option<f64> {
    let mut correct = 0usize;
    let mut total = 0usize;

    for fold in 0..folds {
        let mut train_rows = Vec::new();
        let mut train_labels = Vec::new();
        let mut holdout = Vec::new();
        for i in 0..rows.len() {
            if i % folds == fold {
                holdout.push(i);
            } else {
                train_rows.push(rows[i].clone());
                train_labels.push(labels[i]);
            }
        }

        let positives = train_labels.iter().filter(|&&label| label).count();
        if holdout.is_empty() || positives == 0 || positives == train_labels.len() {
            continue;
        }

        let fitted = match model::fit_svm(&train_rows, &train_labels, cost, gamma) {
            Ok(fitted) => fitted,
            Err(_) => continue,
        };
        for &i in &holdout {
            if (fitted.decision(&rows[i]) > 0.0) == labels[i] {
                correct += 1;
            }
            total += 1;
        }
    }

    if total == 0 {
        None
    } else {
        Some(correct as f64 / total as f64)
    }
}

fn midpoint(grid: &[f64], fallback: f64) -> f64 {
    if grid.is_empty() {
        fallback
    } else {
        grid[grid.len() / 2]
    }
}
