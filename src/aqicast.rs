//! This module provides the main entry point for producing consolidated AQI
//! forecasts. It loads a trained model artifact once at construction and then
//! serves per-country requests against a CSV dataset of monthly observations.

use crate::dataset::features::with_calendar_features;
use crate::dataset::loader::load_and_clean;
use crate::error::AqiCastError;
use crate::forecast::consolidator::{consolidate, CountryCsvWriter};
use crate::forecast::generator::generate;
use crate::forecast::selector::select;
use crate::model::artifact::ModelArtifact;
use crate::types::record::ResultRecord;
use crate::types::request::ForecastRequest;
use crate::types::window::YearWindow;
use crate::utils::{ensure_dir_exists, get_output_dir};
use bon::bon;
use log::info;
use std::path::{Path, PathBuf};

/// The main client for consolidated AQI forecasts.
///
/// The client holds a trained [`ModelArtifact`] (loaded once at construction),
/// the path of the observation dataset, and the directory output files are
/// written to. Each [`predict`](AqiCast::predict) call reads the dataset,
/// partitions the requested year range into observed and missing months,
/// fills the gaps from the model, and writes one
/// `{country}_predictions.csv` file.
///
/// # Examples
///
/// ```rust,no_run
/// # use aqicast::{AqiCast, AqiCastError};
/// # use std::path::PathBuf;
/// # fn run() -> Result<(), AqiCastError> {
/// let client = AqiCast::builder()
///     .model_path(PathBuf::from("aqi_model.bin"))
///     .source(PathBuf::from("aqi_monthly.csv"))
///     .build()?;
///
/// let records = client
///     .predict()
///     .country("Nepal")
///     .from_year(2023)
///     .to_year(2024)
///     .call()?;
/// assert_eq!(records.len(), 24);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AqiCast {
    artifact: ModelArtifact,
    source: PathBuf,
    writer: CountryCsvWriter,
}

#[bon]
impl AqiCast {
    /// Creates a new `AqiCast` client.
    ///
    /// # Arguments
    ///
    /// * `.model_path(PathBuf)`: **Required.** The trained model artifact,
    ///   as written by [`ModelArtifact::save`](crate::ModelArtifact::save).
    /// * `.source(PathBuf)`: **Required.** The CSV dataset of monthly AQI
    ///   observations.
    /// * `.output_dir(PathBuf)`: Optional. Where per-country result files are
    ///   written. Defaults to `aqicast/country_data` under the platform's
    ///   local data directory. The directory is created if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`AqiCastError::Model`] variants when the artifact cannot be
    /// read or decoded, [`AqiCastError::OutputDirResolution`] when no default
    /// output directory can be determined, and
    /// [`AqiCastError::OutputDirCreation`] when the directory cannot be
    /// created.
    #[builder]
    pub fn new(
        model_path: PathBuf,
        source: PathBuf,
        output_dir: Option<PathBuf>,
    ) -> Result<Self, AqiCastError> {
        let artifact = ModelArtifact::load(&model_path)?;
        let output_dir = match output_dir {
            Some(dir) => dir,
            None => get_output_dir().map_err(AqiCastError::OutputDirResolution)?,
        };
        ensure_dir_exists(&output_dir)
            .map_err(|e| AqiCastError::OutputDirCreation(output_dir.clone(), e))?;

        info!(
            "AqiCast ready: model window {}, output dir {:?}",
            artifact.window, output_dir
        );
        Ok(Self {
            artifact,
            source,
            writer: CountryCsvWriter::new(output_dir),
        })
    }

    /// Produces the consolidated forecast for one country and year range.
    ///
    /// Every (year, month) unit from January of `from_year` through December
    /// of `to_year` appears exactly once in the result: as an observed record
    /// when the dataset holds a measurement for it, as a predicted record
    /// otherwise. The full result set is also written to
    /// `{country}_predictions.csv` in the output directory, replacing any
    /// previous file for that country.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.country(&str)`: **Required.** The country name, matched exactly
    ///   against the dataset (case-sensitive).
    /// * `.from_year(i32)`: **Required.** First year of the range.
    /// * `.to_year(i32)`: **Required.** Last year of the range, inclusive.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::CountryNotFound`] when the dataset holds no
    /// rows for the country, and [`ForecastError::InvalidRange`] when the
    /// range is inverted or falls outside the model's supported window. The
    /// country check runs first. Dataset and output I/O failures surface as
    /// the corresponding [`AqiCastError`] variants.
    ///
    /// [`ForecastError::CountryNotFound`]: crate::ForecastError::CountryNotFound
    /// [`ForecastError::InvalidRange`]: crate::ForecastError::InvalidRange
    #[builder]
    pub fn predict(
        &self,
        country: &str,
        from_year: i32,
        to_year: i32,
    ) -> Result<Vec<ResultRecord>, AqiCastError> {
        let cleaned = load_and_clean(&self.source)?;
        let featured = with_calendar_features(cleaned.frame)?;

        let selection = select(&featured, country, from_year, to_year, self.artifact.window)?;
        let predicted = generate(&self.artifact.model, country, &selection.missing_units)?;
        let records = consolidate(country, &selection.observed, predicted);

        self.writer.write(country, &records)?;
        info!(
            "Consolidated {} records for '{}' in [{}, {}]",
            records.len(),
            country,
            from_year,
            to_year
        );
        Ok(records)
    }

    /// Convenience wrapper for callers holding a deserialized
    /// [`ForecastRequest`], typically from a JSON request body.
    pub fn predict_request(
        &self,
        request: &ForecastRequest,
    ) -> Result<Vec<ResultRecord>, AqiCastError> {
        self.predict()
            .country(&request.country)
            .from_year(request.from_year)
            .to_year(request.to_year)
            .call()
    }

    /// The year window the loaded model supports.
    pub fn window(&self) -> YearWindow {
        self.artifact.window
    }

    /// The file a given country's results are written to.
    pub fn output_path(&self, country: &str) -> PathBuf {
        self.writer.output_path(country)
    }

    /// The dataset path this client reads observations from.
    pub fn source(&self) -> &Path {
        &self.source
    }
}
