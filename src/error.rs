use std::{error::Error, fmt, io};

/// Why a single raw record was rejected during preparation.
///
/// Row errors are per-row diagnostics: the preparer skips the offending
/// record and continues with the rest of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// A required column was empty or absent.
    MissingField(&'static str),
    /// `total_sqft` is not a plain number (ranges and unit suffixes count).
    MalformedSqft(String),
    /// The leading token of `size` is not a non-negative integer.
    MalformedSize(String),
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::MissingField(col) => write!(f, "missing field: {col}"),
            RowError::MalformedSqft(raw) => write!(f, "malformed total_sqft: '{raw}'"),
            RowError::MalformedSize(raw) => write!(f, "malformed size: '{raw}'"),
        }
    }
}

impl Error for RowError {}

/// Batch-level preparation failures.
#[derive(Debug)]
pub enum PrepareError {
    /// Every input record was dropped; there is nothing to fit on.
    EmptyDataset,
}

impl fmt::Display for PrepareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrepareError::EmptyDataset => {
                write!(f, "no records survived cleaning, dataset is empty")
            }
        }
    }
}

impl Error for PrepareError {}

/// Training failures.
#[derive(Debug)]
pub enum TrainError {
    /// The training partition would be empty after the holdout split.
    EmptyTrainingSet { rows: usize },
    /// Feature matrix and target vector disagree on the row count.
    ShapeMismatch { x_rows: usize, y_rows: usize },
}

impl fmt::Display for TrainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainError::EmptyTrainingSet { rows } => {
                write!(f, "training partition is empty ({rows} total rows)")
            }
            TrainError::ShapeMismatch { x_rows, y_rows } => {
                write!(f, "shape mismatch: {x_rows} feature rows, {y_rows} targets")
            }
        }
    }
}

impl Error for TrainError {}

/// Inference failures, surfaced to the caller per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictError {
    /// The requested location was never seen by the fitted encoder.
    UnknownLocation(String),
    /// The model's coefficient count does not match the feature width.
    DimensionMismatch { got: usize, expected: usize },
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::UnknownLocation(name) => write!(f, "unknown location: '{name}'"),
            PredictError::DimensionMismatch { got, expected } => {
                write!(f, "coefficient count mismatch: got {got}, expected {expected}")
            }
        }
    }
}

impl Error for PredictError {}

/// Failures loading or storing the serialized model/encoder pair.
///
/// Fatal for inference startup: without both artifacts there is no partial
/// mode of operation.
#[derive(Debug)]
pub enum ArtifactError {
    Io(io::Error),
    Malformed(serde_json::Error),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io(e) => write!(f, "io error: {e}"),
            ArtifactError::Malformed(e) => write!(f, "malformed artifact: {e}"),
        }
    }
}

impl Error for ArtifactError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ArtifactError::Io(e) => Some(e),
            ArtifactError::Malformed(e) => Some(e),
        }
    }
}

impl From<io::Error> for ArtifactError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ArtifactError {
    fn from(value: serde_json::Error) -> Self {
        Self::Malformed(value)
    }
}

/// Boundary conversions for binaries / I/O APIs.
impl From<ArtifactError> for io::Error {
    fn from(value: ArtifactError) -> Self {
        match value {
            ArtifactError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

impl From<PrepareError> for io::Error {
    fn from(value: PrepareError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}

impl From<TrainError> for io::Error {
    fn from(value: TrainError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, value)
    }
}

impl From<PredictError> for io::Error {
    fn from(value: PredictError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, value)
    }
}
