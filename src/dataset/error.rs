use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Source data file not found at '{0}'")]
    SourceUnavailable(PathBuf),

    #[error("Parsing error reading source data '{path}'")]
    CsvReadPolars {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Required column '{column}' not found in source data")]
    MissingColumn { column: String },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
