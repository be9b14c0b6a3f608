use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model artifact '{0}'")]
    ArtifactRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to write model artifact '{0}'")]
    ArtifactWrite(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode model artifact '{0}'")]
    ArtifactDecode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode model artifact")]
    ArtifactEncode(#[source] Box<bincode::error::EncodeError>),

    #[error("Insufficient training data: need at least {needed} rows, got {got}")]
    InsufficientData { needed: usize, got: usize },

    #[error("Regression fit failed: {0}")]
    FitFailed(String),

    #[error("Invalid prediction feature: month {month} is outside 1..=12")]
    InvalidMonth { month: u32 },

    #[error("Failed processing DataFrame: {0}")]
    DataFrameProcessing(#[from] PolarsError),
}
