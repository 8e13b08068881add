use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::encoder::LocationEncoder;
use crate::error::ArtifactError;
use crate::model::PriceModel;

/// Default file name for the serialized model.
pub const MODEL_FILE: &str = "house_price_model.json";

/// Default file name for the serialized encoder.
pub const ENCODER_FILE: &str = "location_encoder.json";

/// Writes the fitted model to `path` as JSON.
///
/// # Errors
/// Returns [`ArtifactError::Io`] if the file cannot be written.
pub fn save_model(model: &PriceModel, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
    save(model, path.as_ref())
}

/// Reads a fitted model back from `path`.
///
/// # Errors
/// [`ArtifactError::Io`] if the file is missing or unreadable,
/// [`ArtifactError::Malformed`] if it does not deserialize.
pub fn load_model(path: impl AsRef<Path>) -> Result<PriceModel, ArtifactError> {
    load(path.as_ref())
}

/// Writes the fitted encoder to `path` as JSON.
///
/// # Errors
/// Returns [`ArtifactError::Io`] if the file cannot be written.
pub fn save_encoder(encoder: &LocationEncoder, path: impl AsRef<Path>) -> Result<(), ArtifactError> {
    save(encoder, path.as_ref())
}

/// Reads a fitted encoder back from `path`.
///
/// # Errors
/// [`ArtifactError::Io`] if the file is missing or unreadable,
/// [`ArtifactError::Malformed`] if it does not deserialize.
pub fn load_encoder(path: impl AsRef<Path>) -> Result<LocationEncoder, ArtifactError> {
    load(path.as_ref())
}

fn save<T: serde::Serialize>(value: &T, path: &Path) -> Result<(), ArtifactError> {
    let file = File::create(path)?;
    serde_json::to_writer(BufWriter::new(file), value)?;
    Ok(())
}

fn load<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
