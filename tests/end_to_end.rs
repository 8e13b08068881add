use std::fs;

use house_pricing::{
    fit, load_encoder, load_model, predict, prepare, save_encoder, save_model, PredictError,
    RawRecord, ENCODER_FILE, MODEL_FILE,
};

fn training_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new("Whitefield", "2 BHK", "1200", 2.0, 85.0),
        RawRecord::new("Whitefield", "3 BHK", "1500", 3.0, 110.0),
        RawRecord::new("Indiranagar", "2 BHK", "1100", 2.0, 95.0),
    ]
}

#[test]
fn prepare_fit_predict_scenario() {
    let prepared = prepare(&training_records()).unwrap();

    // One feature row per record, bhk taken from the leading token of size.
    assert_eq!(prepared.features.nrows(), 3);
    let bhks: Vec<f64> = prepared.features.column(3).to_vec();
    assert_eq!(bhks, vec![2.0, 3.0, 2.0]);

    let model = fit(&prepared.features, &prepared.targets).unwrap();
    let price = predict(&model, &prepared.encoder, "Whitefield", 1200.0, 2, 2).unwrap();
    assert!(price.is_finite());

    // Reproducible: re-running the whole pipeline gives the same number.
    let prepared_again = prepare(&training_records()).unwrap();
    let model_again = fit(&prepared_again.features, &prepared_again.targets).unwrap();
    let price_again =
        predict(&model_again, &prepared_again.encoder, "Whitefield", 1200.0, 2, 2).unwrap();
    assert_eq!(price, price_again);
}

#[test]
fn artifacts_round_trip_between_training_and_inference() {
    let dir = std::env::temp_dir().join(format!("house_pricing_e2e_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();

    let prepared = prepare(&training_records()).unwrap();
    let model = fit(&prepared.features, &prepared.targets).unwrap();
    let direct = predict(&model, &prepared.encoder, "Whitefield", 1200.0, 2, 2).unwrap();

    save_model(&model, dir.join(MODEL_FILE)).unwrap();
    save_encoder(&prepared.encoder, dir.join(ENCODER_FILE)).unwrap();

    // Fresh process simulation: load from disk and predict again.
    let model = load_model(dir.join(MODEL_FILE)).unwrap();
    let encoder = load_encoder(dir.join(ENCODER_FILE)).unwrap();
    let from_disk = predict(&model, &encoder, "Whitefield", 1200.0, 2, 2).unwrap();
    assert_eq!(direct, from_disk);

    fs::remove_dir_all(dir).unwrap();
}

#[test]
fn unknown_location_is_surfaced_after_reload() {
    let prepared = prepare(&training_records()).unwrap();
    let model = fit(&prepared.features, &prepared.targets).unwrap();

    let err = predict(&model, &prepared.encoder, "Jayanagar", 1200.0, 2, 2).unwrap_err();
    assert!(matches!(err, PredictError::UnknownLocation(_)));
}
