//! Merging observed and predicted records and writing the per-country output
//! file.

use crate::dataset::loader::{COL_AQI, COL_COUNTRY};
use crate::forecast::error::ForecastError;
use crate::forecast::selector::ObservedMonth;
use crate::types::record::{Provenance, ResultRecord};
use log::info;
use polars::prelude::*;
use std::fs::File;
use std::path::PathBuf;

/// Merges observed measurements with generated predictions into one result
/// set, observed records first.
///
/// The inputs are disjoint by construction (the selector partitions the
/// requested range), so the merged set holds exactly one record per forecast
/// unit.
pub fn consolidate(
    country: &str,
    observed: &[ObservedMonth],
    predicted: Vec<ResultRecord>,
) -> Vec<ResultRecord> {
    let mut records = Vec::with_capacity(observed.len() + predicted.len());
    for month in observed {
        records.push(ResultRecord {
            country: country.to_string(),
            year: month.year,
            month: month.month,
            datatype: Provenance::Observed,
            aqi_value: month.aqi_value,
        });
    }
    records.extend(predicted);
    records
}

/// Writes consolidated result sets as `{country}_predictions.csv` files under
/// a fixed output directory, replacing any previous file for the country.
#[derive(Debug, Clone)]
pub struct CountryCsvWriter {
    output_dir: PathBuf,
}

impl CountryCsvWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        CountryCsvWriter { output_dir }
    }

    /// The file a given country's results are written to.
    pub fn output_path(&self, country: &str) -> PathBuf {
        self.output_dir.join(format!("{country}_predictions.csv"))
    }

    /// Writes the result set for one country, overwriting any existing file.
    pub fn write(&self, country: &str, records: &[ResultRecord]) -> Result<PathBuf, ForecastError> {
        let path = self.output_path(country);
        let mut frame = records_to_frame(records)?;

        let file = File::create(&path)
            .map_err(|e| ForecastError::OutputWrite(path.clone(), e))?;
        CsvWriter::new(file)
            .include_header(true)
            .finish(&mut frame)
            .map_err(|e| ForecastError::OutputEncode(path.clone(), e))?;

        info!("Wrote {} records to {}", records.len(), path.display());
        Ok(path)
    }
}

fn records_to_frame(records: &[ResultRecord]) -> Result<DataFrame, ForecastError> {
    let countries: Vec<&str> = records.iter().map(|r| r.country.as_str()).collect();
    let years: Vec<i32> = records.iter().map(|r| r.year).collect();
    let months: Vec<i32> = records.iter().map(|r| r.month as i32).collect();
    let datatypes: Vec<&str> = records.iter().map(|r| r.datatype.as_str()).collect();
    let values: Vec<f64> = records.iter().map(|r| r.aqi_value).collect();

    let frame = df!(
        COL_COUNTRY => countries,
        "year" => years,
        "month" => months,
        "datatype" => datatypes,
        COL_AQI => values,
    )?;
    Ok(frame)
}
