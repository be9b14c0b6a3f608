use serde::{Deserialize, Serialize};

/// The request shape an outer transport layer hands to the pipeline.
///
/// # Examples
///
/// ```
/// use aqicast::ForecastRequest;
///
/// let request: ForecastRequest = serde_json::from_str(
///     r#"{"country": "Nepal", "from_year": 2023, "to_year": 2024}"#,
/// ).unwrap();
/// assert_eq!(request.country, "Nepal");
/// assert_eq!(request.from_year, 2023);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    pub country: String,
    pub from_year: i32,
    pub to_year: i32,
}
