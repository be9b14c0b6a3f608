use crate::dataset::error::DatasetError;
use crate::dataset::loader::{COL_AQI, COL_COUNTRY, COL_DATE};
use chrono::NaiveDate;
use polars::prelude::*;

/// One measured AQI reading.
///
/// After cleaning, every row of the dataset frame corresponds to exactly one
/// `Observation` with a parseable date and a finite value; malformed source
/// rows never make it this far.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub country: String,
    pub date: NaiveDate,
    pub aqi_value: f64,
}

impl Observation {
    /// Collects every row of a cleaned frame into typed observations.
    pub fn from_frame(frame: &DataFrame) -> Result<Vec<Observation>, DatasetError> {
        let countries = frame.column(COL_COUNTRY)?.str()?;
        let dates = frame.column(COL_DATE)?.date()?;
        let values = frame.column(COL_AQI)?.f64()?;

        let mut observations = Vec::with_capacity(frame.height());
        for (i, date) in dates.as_date_iter().enumerate() {
            let (Some(country), Some(date), Some(aqi_value)) =
                (countries.get(i), date, values.get(i))
            else {
                continue;
            };
            observations.push(Observation {
                country: country.to_string(),
                date,
                aqi_value,
            });
        }
        Ok(observations)
    }
}
