use std::{
    env,
    fs::File,
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

use log::{info, warn};

use house_pricing::{
    fit, holdout_mse, prepare, save_encoder, save_model, RawRecord, ENCODER_FILE, MODEL_FILE,
};

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(dataset) = args.next() else {
        eprintln!("usage: train <dataset.csv> [out_dir]");
        return ExitCode::FAILURE;
    };
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| ".".to_string()));

    match run(&dataset, &out_dir) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("training failed: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(dataset: &str, out_dir: &Path) -> io::Result<()> {
    let records = load_records(dataset)?;
    info!("loaded {} raw records from {dataset}", records.len());

    let prepared = prepare(&records)?;
    info!(
        "prepared {} feature rows over {} locations",
        prepared.features.nrows(),
        prepared.encoder.len()
    );

    let model = fit(&prepared.features, &prepared.targets)?;
    if let Some(mse) = holdout_mse(&model, &prepared.features, &prepared.targets) {
        info!("holdout mse: {mse:.4}");
    }

    let model_path = out_dir.join(MODEL_FILE);
    let encoder_path = out_dir.join(ENCODER_FILE);
    save_model(&model, &model_path)?;
    save_encoder(&prepared.encoder, &encoder_path)?;
    info!(
        "saved model to {} and encoder to {}",
        model_path.display(),
        encoder_path.display()
    );

    Ok(())
}

/// Reads the dataset CSV into raw records. Headers are required; columns
/// beyond the ones named in [`RawRecord`] are ignored.
fn load_records(path: &str) -> io::Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(File::open(path)?);

    let mut records = Vec::new();
    for result in reader.deserialize() {
        match result {
            Ok(record) => records.push(record),
            Err(e) => warn!("skipping unreadable csv row: {e}"),
        }
    }
    Ok(records)
}
