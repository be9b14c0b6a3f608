use crate::dataset::error::DatasetError;
use crate::forecast::error::ForecastError;
use crate::model::error::ModelError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AqiCastError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Forecast(#[from] ForecastError),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to determine output directory")]
    OutputDirResolution(#[source] std::io::Error),
}

/// Coarse failure classes for an outer transport layer to map onto its own
/// status codes. Diagnostic detail stays inside the error value and is not
/// meant to be exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    NotFound,
    BadRequest,
    Internal,
}

impl AqiCastError {
    pub fn class(&self) -> ErrorClass {
        match self {
            AqiCastError::Dataset(DatasetError::SourceUnavailable(_)) => ErrorClass::NotFound,
            AqiCastError::Forecast(ForecastError::CountryNotFound(_)) => ErrorClass::NotFound,
            AqiCastError::Forecast(ForecastError::InvalidRange { .. }) => ErrorClass::BadRequest,
            _ => ErrorClass::Internal,
        }
    }
}
