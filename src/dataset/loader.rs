//! Reads the raw AQI source file and cleans it into a typed frame.
//!
//! Row-level quality problems (unparseable dates, non-numeric values) are a
//! data-quality filter, not errors: affected rows are dropped and counted,
//! never surfaced as failures.

use crate::dataset::error::DatasetError;
use log::{info, warn};
use polars::prelude::*;
use std::path::Path;

// Column names as they appear in the raw source.
const COL_RAW_COUNTRY: &str = "Country";
const COL_RAW_DATE: &str = "Date";
const COL_RAW_AQI: &str = "AQI Value";

// Canonical column names used by the rest of the pipeline.
pub(crate) const COL_COUNTRY: &str = "country";
pub(crate) const COL_DATE: &str = "date";
pub(crate) const COL_AQI: &str = "aqi_value";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A cleaned dataset frame plus the number of raw rows the cleaning dropped.
#[derive(Debug, Clone)]
pub struct CleanedData {
    /// Columns: `country` (str), `date` (date), `aqi_value` (f64).
    pub frame: DataFrame,
    pub dropped_rows: usize,
}

/// Reads the raw source CSV with every column as string; type coercion
/// happens in [`clean`] so that bad values become droppable nulls instead of
/// read failures.
pub fn load_raw(path: &Path) -> Result<DataFrame, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::SourceUnavailable(path.to_path_buf()));
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| DatasetError::CsvReadPolars {
            path: path.to_path_buf(),
            source: e,
        })?
        .finish()
        .map_err(|e| DatasetError::CsvReadPolars {
            path: path.to_path_buf(),
            source: e,
        })?;

    for column in [COL_RAW_COUNTRY, COL_RAW_DATE, COL_RAW_AQI] {
        if df.column(column).is_err() {
            return Err(DatasetError::MissingColumn {
                column: column.to_string(),
            });
        }
    }

    info!("Loaded {} raw rows from {:?}", df.height(), path);
    Ok(df)
}

/// Coerces types and drops invalid rows.
///
/// Dates are parsed non-strictly against `%Y-%m-%d` and AQI values are cast
/// non-strictly to Float64, so malformed fields become nulls; rows with a
/// null date or a null/non-finite value are then filtered out and counted.
pub fn clean(df: DataFrame) -> Result<CleanedData, DatasetError> {
    let raw_height = df.height();

    let date_options = StrptimeOptions {
        format: Some(DATE_FORMAT.into()),
        strict: false,
        ..Default::default()
    };

    let frame = df
        .lazy()
        .select([
            col(COL_RAW_COUNTRY).alias(COL_COUNTRY),
            col(COL_RAW_DATE).str().to_date(date_options).alias(COL_DATE),
            col(COL_RAW_AQI).cast(DataType::Float64).alias(COL_AQI),
        ])
        .filter(
            col(COL_DATE)
                .is_not_null()
                .and(col(COL_AQI).is_not_null())
                .and(col(COL_AQI).is_finite()),
        )
        .collect()?;

    let dropped_rows = raw_height - frame.height();
    if dropped_rows > 0 {
        warn!(
            "Dropped {} of {} raw rows during cleaning (unparseable date or non-numeric AQI value)",
            dropped_rows, raw_height
        );
    }
    info!("Cleaned dataset has {} rows", frame.height());

    Ok(CleanedData {
        frame,
        dropped_rows,
    })
}

/// One-step load + clean, the shape every pipeline pass starts with.
pub fn load_and_clean(path: &Path) -> Result<CleanedData, DatasetError> {
    clean(load_raw(path)?)
}
