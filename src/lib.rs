mod artifact;
mod data;
mod encoder;
mod error;
mod model;
mod predict;
mod train;

pub use artifact::{
    load_encoder, load_model, save_encoder, save_model, ENCODER_FILE, MODEL_FILE,
};
pub use data::{prepare, CleanRecord, Prepared, RawRecord};
pub use encoder::LocationEncoder;
pub use error::{ArtifactError, PredictError, PrepareError, RowError, TrainError};
pub use model::{PriceModel, FEATURE_COUNT};
pub use predict::predict;
pub use train::{fit, holdout_mse, HOLDOUT_FRACTION, SPLIT_SEED};
