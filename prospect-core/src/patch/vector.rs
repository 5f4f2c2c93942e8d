use serde::{Deserialize, Serialize};

/// A single named feature produced by the upstream extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub value: f64,
}

impl Feature {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Ordered feature vector. All patches in one session carry the same
/// feature count and ordering; the extractor guarantees this.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureVector(Vec<Feature>);

impl FeatureVector {
    pub fn new(features: Vec<Feature>) -> Self {
        Self(features)
    }

    /// Build a vector from bare values, with positional feature names.
    pub fn from_values(values: &[f64]) -> Self {
        Self(
            values
                .iter()
                .enumerate()
                .map(|(i, &value)| Feature::new(format!("f{i}"), value))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Feature> {
        self.0.iter()
    }

    /// Feature values in extractor order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|f| f.value)
    }

    pub fn to_values(&self) -> Vec<f64> {
        self.values().collect()
    }

    /// True if any value is NaN or infinite.
    pub fn has_non_finite(&self) -> bool {
        self.0.iter().any(|f| !f.value.is_finite())
    }

    /// Squared Euclidean distance over paired features.
    pub fn squared_distance(&self, other: &FeatureVector) -> f64 {
        self.values()
            .zip(other.values())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}
