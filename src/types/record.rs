//! Output row types shared across the forecast pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a result row is backed by a real measurement or was produced by
/// the regression model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Observed,
    Predicted,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Observed => "observed",
            Provenance::Predicted => "predicted",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One output row: exactly one exists per forecast unit of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRecord {
    pub country: String,
    pub year: i32,
    pub month: u32,
    pub datatype: Provenance,
    pub aqi_value: f64,
}
