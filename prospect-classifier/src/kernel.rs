//! Radial basis function kernel.

use serde::{Deserialize, Serialize};

/// RBF kernel: `k(a, b) = exp(-gamma * ||a - b||^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RbfKernel {
    pub gamma: f64,
}

impl RbfKernel {
    pub fn new(gamma: f64) -> Self {
        Self { gamma }
    }

    pub fn evaluate(&self, a: &[f64], b: &[f64]) -> f64 {
        (-self.gamma * squared_distance(a, b)).exp()
    }
}

fn squared_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn self_similarity_is_one() {
        let kernel = RbfKernel::new(0.5);
        assert_eq!(kernel.evaluate(&[0.3, 0.7], &[0.3, 0.7]), 1.0);
    }

    #[test]
    fn kernel_is_symmetric() {
        let kernel = RbfKernel::new(2.0);
        let a = [0.1, 0.9];
        let b = [0.4, 0.2];
        assert_eq!(kernel.evaluate(&a, &b), kernel.evaluate(&b, &a));
    }

    #[test]
    fn matches_hand_computed_value() {
        // ||a - b||^2 = 0.25, gamma = 2 -> exp(-0.5)
        let kernel = RbfKernel::new(2.0);
        let got = kernel.evaluate(&[0.5], &[0.0]);
        assert!((got - (-0.5f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn similarity_decays_with_distance() {
        let kernel = RbfKernel::new(1.0);
        let near = kernel.evaluate(&[0.0], &[0.1]);
        let far = kernel.evaluate(&[0.0], &[2.0]);
        assert!(near > far);
    }
}
