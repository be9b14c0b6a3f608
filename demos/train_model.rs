//! Trains a seasonal OLS model on a monthly AQI dataset and writes the
//! artifact to disk.
//!
//! Usage: `cargo run --example train_model -- <dataset.csv> <model.bin>`

use aqicast::{
    load_and_clean, train, with_calendar_features, AqiCastError, Observation, DEFAULT_WINDOW,
};
use std::env;
use std::path::PathBuf;

fn main() -> Result<(), AqiCastError> {
    let mut args = env::args().skip(1);
    let dataset = PathBuf::from(args.next().unwrap_or_else(|| "aqi_monthly.csv".to_string()));
    let model_path = PathBuf::from(args.next().unwrap_or_else(|| "aqi_model.bin".to_string()));

    let cleaned = load_and_clean(&dataset)?;
    println!(
        "Loaded {} rows ({} malformed rows dropped)",
        cleaned.frame.height(),
        cleaned.dropped_rows
    );

    let observations = Observation::from_frame(&cleaned.frame)?;
    let earliest = observations.iter().map(|o| o.date).min();
    let latest = observations.iter().map(|o| o.date).max();
    if let (Some(earliest), Some(latest)) = (earliest, latest) {
        println!("Observations span {earliest} through {latest}");
    }

    let featured = with_calendar_features(cleaned.frame)?;
    let (artifact, report) = train(&featured, DEFAULT_WINDOW)?;

    match report.mse {
        Some(mse) => println!(
            "Trained on {} rows, held-out MSE {:.4} over {} rows",
            report.n_train, mse, report.n_test
        ),
        None => println!("Trained on {} rows (no holdout split)", report.n_train),
    }

    artifact.save(&model_path)?;
    println!(
        "Saved model with window {} to {}",
        artifact.window,
        model_path.display()
    );
    Ok(())
}
