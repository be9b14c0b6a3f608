//! Produces a consolidated forecast for one country and prints the records.
//!
//! Usage: `cargo run --example predict_country -- <country> <from_year> <to_year>`

use aqicast::{AqiCast, AqiCastError};
use std::env;
use std::path::PathBuf;
use std::process::exit;

fn main() -> Result<(), AqiCastError> {
    let args: Vec<String> = env::args().skip(1).collect();
    let country = args.first().map(String::as_str).unwrap_or("Nepal");
    let from_year = parse_year(args.get(1), 2023);
    let to_year = parse_year(args.get(2), 2024);

    let client = AqiCast::builder()
        .model_path(PathBuf::from("aqi_model.bin"))
        .source(PathBuf::from("aqi_monthly.csv"))
        .build()?;

    let records = match client
        .predict()
        .country(country)
        .from_year(from_year)
        .to_year(to_year)
        .call()
    {
        Ok(records) => records,
        Err(e) => {
            eprintln!("{} ({:?})", e, e.class());
            exit(1);
        }
    };

    for record in &records {
        println!(
            "{} {:04}-{:02} {:>9} {:.2}",
            record.country, record.year, record.month, record.datatype, record.aqi_value
        );
    }
    println!(
        "{} records written to {}",
        records.len(),
        client.output_path(country).display()
    );
    Ok(())
}

fn parse_year(arg: Option<&String>, default: i32) -> i32 {
    arg.and_then(|s| s.parse().ok()).unwrap_or(default)
}
