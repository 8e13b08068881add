use log::{debug, warn};
use ndarray::{Array1, Array2};

use super::record::{CleanRecord, RawRecord};
use crate::encoder::LocationEncoder;
use crate::error::PrepareError;
use crate::model::FEATURE_COUNT;

/// Bathroom counts at or above this are treated as data-entry outliers.
const MAX_BATH: f64 = 10.0;

/// Output of the dataset preparer: a training-ready feature matrix, the
/// matching target vector, and the encoder fitted on the surviving rows.
///
/// The encoder must be retained by the caller; inference needs it to map
/// location names to the codes the model was trained on.
#[derive(Debug, Clone)]
pub struct Prepared {
    /// One row per surviving record, columns `[location_code, total_sqft, bath, bhk]`.
    pub features: Array2<f64>,
    /// Price per surviving record, same row order as `features`.
    pub targets: Array1<f64>,
    pub encoder: LocationEncoder,
}

/// Cleans raw records into a strict numeric feature schema.
///
/// Malformed rows (missing fields, unparseable `total_sqft` or `size`) and
/// bath-count outliers are skipped, never fatal to the batch. Row order of
/// the output matches the input order of the surviving records.
///
/// # Errors
/// Returns [`PrepareError::EmptyDataset`] when no record survives cleaning.
pub fn prepare(records: &[RawRecord]) -> Result<Prepared, PrepareError> {
    let mut clean: Vec<CleanRecord> = Vec::with_capacity(records.len());
    let mut malformed = 0usize;
    let mut outliers = 0usize;

    for (i, record) in records.iter().enumerate() {
        match record.clean() {
            Ok(rec) if rec.bath >= MAX_BATH => {
                debug!("row {i}: dropped bath outlier ({} baths)", rec.bath);
                outliers += 1;
            }
            Ok(rec) => clean.push(rec),
            Err(e) => {
                warn!("row {i}: skipped, {e}");
                malformed += 1;
            }
        }
    }

    debug!(
        "cleaning kept {} of {} rows ({malformed} malformed, {outliers} outliers)",
        clean.len(),
        records.len()
    );

    if clean.is_empty() {
        return Err(PrepareError::EmptyDataset);
    }

    let encoder = LocationEncoder::fit(clean.iter().map(|r| r.location.as_str()));

    let mut flat = Vec::with_capacity(clean.len() * FEATURE_COUNT);
    let mut targets = Vec::with_capacity(clean.len());
    for rec in &clean {
        // Every surviving location was just fitted, so the lookup cannot miss.
        let code = encoder.encode(&rec.location).unwrap();
        flat.extend([code as f64, rec.total_sqft, rec.bath, f64::from(rec.bhk)]);
        targets.push(rec.price);
    }

    let rows = clean.len();
    let features = Array2::from_shape_vec((rows, FEATURE_COUNT), flat).unwrap();
    let targets = Array1::from_vec(targets);

    Ok(Prepared {
        features,
        targets,
        encoder,
    })
}
