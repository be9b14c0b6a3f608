use crate::model::error::ModelError;
use crate::types::window::YearWindow;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("No data found for country '{0}'")]
    CountryNotFound(String),

    #[error("Cannot predict for years [{from_year}, {to_year}]: supported window is {window}")]
    InvalidRange {
        from_year: i32,
        to_year: i32,
        window: YearWindow,
    },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),

    #[error("Failed to write output file '{0}'")]
    OutputWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to encode output file '{0}'")]
    OutputEncode(PathBuf, #[source] PolarsError),
}
