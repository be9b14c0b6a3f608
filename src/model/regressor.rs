//! The trained model the forecast generator queries.

use crate::model::error::ModelError;
use serde::{Deserialize, Serialize};

/// A trained model queried for one monthly AQI estimate at a time.
///
/// Implementations are stateless between calls: `predict` takes the two
/// integer calendar features and returns a single real-valued estimate.
/// The generator treats the model as a black box, so tests can substitute
/// a mock implementation.
pub trait AqiModel {
    fn predict(&self, year: i32, month: u32) -> Result<f64, ModelError>;
}

/// Linear regression over a centered year trend and month-of-year dummies.
///
/// January is the baseline month (effect 0.0); the remaining eleven month
/// effects are fitted coefficients. The year feature is centered on the
/// training data's mean year to keep the intercept well-conditioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalOlsModel {
    pub(crate) intercept: f64,
    pub(crate) year_coef: f64,
    pub(crate) month_effects: [f64; 12],
    pub(crate) base_year: f64,
}

impl AqiModel for SeasonalOlsModel {
    fn predict(&self, year: i32, month: u32) -> Result<f64, ModelError> {
        if !(1..=12).contains(&month) {
            return Err(ModelError::InvalidMonth { month });
        }
        let seasonal = self.month_effects[(month - 1) as usize];
        Ok(self.intercept + self.year_coef * (f64::from(year) - self.base_year) + seasonal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_model() -> SeasonalOlsModel {
        let mut month_effects = [0.0; 12];
        month_effects[5] = -4.5; // June
        SeasonalOlsModel {
            intercept: 60.0,
            year_coef: 2.0,
            month_effects,
            base_year: 2023.0,
        }
    }

    #[test]
    fn test_predict_combines_trend_and_season() {
        let model = test_model();
        // January 2023: intercept only
        assert_eq!(model.predict(2023, 1).unwrap(), 60.0);
        // January 2025: two years of trend
        assert_eq!(model.predict(2025, 1).unwrap(), 64.0);
        // June 2023: seasonal effect
        assert_eq!(model.predict(2023, 6).unwrap(), 55.5);
    }

    #[test]
    fn test_predict_is_deterministic() {
        let model = test_model();
        let first = model.predict(2024, 7).unwrap();
        let second = model.predict(2024, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_predict_rejects_invalid_month() {
        let model = test_model();
        assert!(matches!(
            model.predict(2023, 0),
            Err(ModelError::InvalidMonth { month: 0 })
        ));
        assert!(matches!(
            model.predict(2023, 13),
            Err(ModelError::InvalidMonth { month: 13 })
        ));
    }
}
