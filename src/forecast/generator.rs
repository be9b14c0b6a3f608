//! Prediction of missing forecast units.

use crate::forecast::error::ForecastError;
use crate::model::regressor::AqiModel;
use crate::types::record::{Provenance, ResultRecord};

/// Queries the model once per missing unit and labels each estimate as
/// predicted.
///
/// Units are expected in ascending (year, month) order, as produced by the
/// selector, and the output preserves that order. Any failing prediction
/// aborts the whole request; there is no partial output.
pub fn generate(
    model: &dyn AqiModel,
    country: &str,
    missing_units: &[(i32, u32)],
) -> Result<Vec<ResultRecord>, ForecastError> {
    let mut predictions = Vec::with_capacity(missing_units.len());
    for &(year, month) in missing_units {
        let aqi_value = model.predict(year, month)?;
        predictions.push(ResultRecord {
            country: country.to_string(),
            year,
            month,
            datatype: Provenance::Predicted,
            aqi_value,
        });
    }
    Ok(predictions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::error::ModelError;

    /// Deterministic stand-in model: aqi = year + month / 100.
    struct StubModel;

    impl AqiModel for StubModel {
        fn predict(&self, year: i32, month: u32) -> Result<f64, ModelError> {
            Ok(f64::from(year) + f64::from(month) / 100.0)
        }
    }

    /// Fails on one specific unit to exercise the all-or-nothing contract.
    struct FailingModel;

    impl AqiModel for FailingModel {
        fn predict(&self, year: i32, month: u32) -> Result<f64, ModelError> {
            if (year, month) == (2023, 6) {
                Err(ModelError::InvalidMonth { month })
            } else {
                Ok(50.0)
            }
        }
    }

    #[test]
    fn test_generates_one_record_per_unit_in_order() {
        let units = vec![(2023, 2), (2023, 3), (2024, 1)];
        let records = generate(&StubModel, "Nepal", &units).unwrap();

        assert_eq!(records.len(), 3);
        for (record, &(year, month)) in records.iter().zip(&units) {
            assert_eq!(record.country, "Nepal");
            assert_eq!((record.year, record.month), (year, month));
            assert_eq!(record.datatype, Provenance::Predicted);
            assert_eq!(record.aqi_value, f64::from(year) + f64::from(month) / 100.0);
        }
    }

    #[test]
    fn test_empty_units_yield_empty_output() {
        let records = generate(&StubModel, "Nepal", &[]).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_single_failure_aborts_everything() {
        let units = vec![(2023, 5), (2023, 6), (2023, 7)];
        let err = generate(&FailingModel, "Nepal", &units).unwrap_err();
        assert!(matches!(err, ForecastError::Model(_)));
    }
}
