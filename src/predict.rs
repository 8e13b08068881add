use crate::encoder::LocationEncoder;
use crate::error::PredictError;
use crate::model::{PriceModel, FEATURE_COUNT};

/// Estimates a price for one house.
///
/// Encodes `location_name` through the fitted encoder, builds the feature
/// row in the fixed `[location_code, total_sqft, bath, bhk]` order, and
/// applies the linear model. Pure and deterministic; safe to call from any
/// number of readers sharing the model/encoder pair.
///
/// The output is not clamped: out-of-distribution inputs can produce
/// negative or otherwise nonsensical prices.
///
/// # Errors
/// - [`PredictError::UnknownLocation`] when the encoder has never seen
///   `location_name`. Never substitutes a default code.
/// - [`PredictError::DimensionMismatch`] when the model was fitted on a
///   different feature width (corrupt or foreign artifact).
pub fn predict(
    model: &PriceModel,
    encoder: &LocationEncoder,
    location_name: &str,
    total_sqft: f64,
    bath: u32,
    bhk: u32,
) -> Result<f64, PredictError> {
    if model.coefficients().len() != FEATURE_COUNT {
        return Err(PredictError::DimensionMismatch {
            got: model.coefficients().len(),
            expected: FEATURE_COUNT,
        });
    }

    let code = encoder
        .encode(location_name)
        .ok_or_else(|| PredictError::UnknownLocation(location_name.to_string()))?;

    let features = [code as f64, total_sqft, f64::from(bath), f64::from(bhk)];
    Ok(model.apply(&features))
}
