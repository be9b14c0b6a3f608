//! Monthly AQI forecasts per country.
//!
//! This crate consolidates historical air quality observations with
//! regression-model predictions: a requested year range is partitioned into
//! observed and missing month-units, the model is queried only for the
//! missing units, and both halves are merged into one result set per country.

mod aqicast;
mod dataset;
mod error;
mod forecast;
mod model;
mod types;
mod utils;

pub use crate::aqicast::AqiCast;
pub use crate::error::{AqiCastError, ErrorClass};

pub use crate::dataset::error::DatasetError;
pub use crate::dataset::features::with_calendar_features;
pub use crate::dataset::loader::{clean, load_and_clean, load_raw, CleanedData};

pub use crate::forecast::consolidator::{consolidate, CountryCsvWriter};
pub use crate::forecast::error::ForecastError;
pub use crate::forecast::generator::generate;
pub use crate::forecast::selector::{select, ObservedMonth, Selection};

pub use crate::model::artifact::ModelArtifact;
pub use crate::model::error::ModelError;
pub use crate::model::regressor::{AqiModel, SeasonalOlsModel};
pub use crate::model::trainer::{train, TrainingReport};

pub use crate::types::observation::Observation;
pub use crate::types::record::{Provenance, ResultRecord};
pub use crate::types::request::ForecastRequest;
pub use crate::types::window::{YearWindow, DEFAULT_WINDOW};
