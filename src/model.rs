use serde::{Deserialize, Serialize};

/// Width of a feature row: `[location_code, total_sqft, bath, bhk]`.
pub const FEATURE_COUNT: usize = 4;

/// A fitted linear mapping from a feature row to a price.
///
/// Owns its coefficient vector and intercept; immutable after fitting and
/// serialized as the "model" artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModel {
    coefficients: Vec<f64>,
    intercept: f64,
}

impl PriceModel {
    pub(crate) fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
        }
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Applies the linear model to a feature row of matching width.
    ///
    /// Callers go through [`crate::predict`], which validates the width and
    /// encodes the location first.
    pub(crate) fn apply(&self, features: &[f64]) -> f64 {
        self.intercept
            + self
                .coefficients
                .iter()
                .zip(features)
                .map(|(c, x)| c * x)
                .sum::<f64>()
    }
}
