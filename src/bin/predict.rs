use std::{env, path::PathBuf, process::ExitCode};

use log::info;

use house_pricing::{
    load_encoder, load_model, predict, PredictError, ENCODER_FILE, MODEL_FILE,
};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 4 {
        eprintln!("usage: predict <location> <total_sqft> <bath> <bhk> [artifact_dir]");
        return ExitCode::FAILURE;
    }

    let location = &args[0];
    let (Ok(total_sqft), Ok(bath), Ok(bhk)) = (
        args[1].parse::<f64>(),
        args[2].parse::<u32>(),
        args[3].parse::<u32>(),
    ) else {
        eprintln!("total_sqft must be a number, bath and bhk non-negative integers");
        return ExitCode::FAILURE;
    };
    let dir = PathBuf::from(args.get(4).map(String::as_str).unwrap_or("."));

    let (model, encoder) = match (load_model(dir.join(MODEL_FILE)), load_encoder(dir.join(ENCODER_FILE))) {
        (Ok(model), Ok(encoder)) => (model, encoder),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("cannot load artifacts from {}: {e}", dir.display());
            return ExitCode::FAILURE;
        }
    };
    info!("loaded artifacts from {}", dir.display());

    match predict(&model, &encoder, location, total_sqft, bath, bhk) {
        Ok(price) => {
            println!("estimated price: {price:.2}");
            ExitCode::SUCCESS
        }
        Err(PredictError::UnknownLocation(name)) => {
            eprintln!("unknown location '{name}', known locations are:");
            for class in encoder.classes() {
                eprintln!("  {class}");
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("prediction failed: {e}");
            ExitCode::FAILURE
        }
    }
}
