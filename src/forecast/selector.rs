//! Country filtering and partitioning of requested months into observed and
//! missing forecast units.

use crate::dataset::features::{COL_MONTH, COL_YEAR};
use crate::dataset::loader::{COL_AQI, COL_COUNTRY};
use crate::forecast::error::ForecastError;
use crate::types::window::YearWindow;
use log::info;
use polars::prelude::*;
use std::collections::HashSet;

/// One observed monthly measurement for the selected country.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservedMonth {
    pub year: i32,
    pub month: u32,
    pub aqi_value: f64,
}

/// The partition of a request's forecast units.
///
/// Every (year, month) unit in the requested range appears on exactly one
/// side: in `observed` when a measurement exists for it, in `missing_units`
/// otherwise. `observed` keeps the source row order; `missing_units` is
/// ascending by (year, month).
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub observed: Vec<ObservedMonth>,
    pub missing_units: Vec<(i32, u32)>,
}

/// Filters a featured frame to one country (exact, case-sensitive match) and
/// partitions the requested year range.
///
/// The empty-country check runs before range validation: an unknown country
/// reports [`ForecastError::CountryNotFound`] even when the range is also
/// invalid, matching the request-handling order of the serving surface.
pub fn select(
    frame: &DataFrame,
    country: &str,
    from_year: i32,
    to_year: i32,
    window: YearWindow,
) -> Result<Selection, ForecastError> {
    let country_frame = frame
        .clone()
        .lazy()
        .filter(col(COL_COUNTRY).eq(lit(country)))
        .collect()?;

    if country_frame.height() == 0 {
        return Err(ForecastError::CountryNotFound(country.to_string()));
    }

    if from_year > to_year || !window.covers(from_year, to_year) {
        return Err(ForecastError::InvalidRange {
            from_year,
            to_year,
            window,
        });
    }

    let in_range = country_frame
        .lazy()
        .filter(
            col(COL_YEAR)
                .gt_eq(lit(from_year))
                .and(col(COL_YEAR).lt_eq(lit(to_year))),
        )
        .collect()?;

    let years = in_range.column(COL_YEAR)?.i32()?;
    let months = in_range.column(COL_MONTH)?.i32()?;
    let values = in_range.column(COL_AQI)?.f64()?;

    let mut observed = Vec::with_capacity(in_range.height());
    let mut observed_units: HashSet<(i32, u32)> = HashSet::with_capacity(in_range.height());
    for i in 0..in_range.height() {
        let (Some(year), Some(month), Some(aqi_value)) =
            (years.get(i), months.get(i), values.get(i))
        else {
            continue;
        };
        let month = month as u32;
        // First measurement wins when a month was observed more than once,
        // keeping exactly one result record per forecast unit.
        if observed_units.insert((year, month)) {
            observed.push(ObservedMonth {
                year,
                month,
                aqi_value,
            });
        }
    }

    let mut missing_units = Vec::new();
    for year in from_year..=to_year {
        for month in 1..=12u32 {
            if !observed_units.contains(&(year, month)) {
                missing_units.push((year, month));
            }
        }
    }

    info!(
        "Selected {} observed months and {} missing units for '{}' in [{}, {}]",
        observed.len(),
        missing_units.len(),
        country,
        from_year,
        to_year
    );

    Ok(Selection {
        observed,
        missing_units,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::window::DEFAULT_WINDOW;

    fn featured_frame() -> DataFrame {
        df!(
            COL_COUNTRY => ["Nepal", "Nepal", "India", "Nepal"],
            COL_YEAR => [2023, 2023, 2023, 2024],
            COL_MONTH => [1, 7, 3, 2],
            COL_AQI => [80.0, 75.0, 55.0, 90.0],
        )
        .expect("test frame")
    }

    #[test]
    fn test_partition_is_disjoint_and_complete() {
        let selection = select(&featured_frame(), "Nepal", 2023, 2024, DEFAULT_WINDOW).unwrap();

        let observed_units: HashSet<(i32, u32)> = selection
            .observed
            .iter()
            .map(|o| (o.year, o.month))
            .collect();
        let missing_units: HashSet<(i32, u32)> =
            selection.missing_units.iter().copied().collect();

        assert!(observed_units.is_disjoint(&missing_units));
        assert_eq!(observed_units.len() + missing_units.len(), 24);
        for year in 2023..=2024 {
            for month in 1..=12u32 {
                assert!(
                    observed_units.contains(&(year, month)) ^ missing_units.contains(&(year, month))
                );
            }
        }
    }

    #[test]
    fn test_observed_excludes_other_countries_and_years() {
        let selection = select(&featured_frame(), "Nepal", 2023, 2023, DEFAULT_WINDOW).unwrap();
        assert_eq!(
            selection.observed,
            vec![
                ObservedMonth { year: 2023, month: 1, aqi_value: 80.0 },
                ObservedMonth { year: 2023, month: 7, aqi_value: 75.0 },
            ]
        );
        assert_eq!(selection.missing_units.len(), 10);
    }

    #[test]
    fn test_missing_units_are_ascending() {
        let selection = select(&featured_frame(), "Nepal", 2023, 2024, DEFAULT_WINDOW).unwrap();
        let mut sorted = selection.missing_units.clone();
        sorted.sort_unstable();
        assert_eq!(selection.missing_units, sorted);
    }

    #[test]
    fn test_duplicate_observation_keeps_first() {
        let frame = df!(
            COL_COUNTRY => ["Nepal", "Nepal"],
            COL_YEAR => [2023, 2023],
            COL_MONTH => [1, 1],
            COL_AQI => [80.0, 99.0],
        )
        .expect("test frame");
        let selection = select(&frame, "Nepal", 2023, 2023, DEFAULT_WINDOW).unwrap();
        assert_eq!(selection.observed.len(), 1);
        assert_eq!(selection.observed[0].aqi_value, 80.0);
        assert_eq!(selection.missing_units.len(), 11);
    }

    #[test]
    fn test_unknown_country_is_not_found() {
        let err = select(&featured_frame(), "Atlantis", 2023, 2023, DEFAULT_WINDOW).unwrap_err();
        assert!(matches!(err, ForecastError::CountryNotFound(c) if c == "Atlantis"));
    }

    #[test]
    fn test_country_match_is_case_sensitive() {
        let err = select(&featured_frame(), "nepal", 2023, 2023, DEFAULT_WINDOW).unwrap_err();
        assert!(matches!(err, ForecastError::CountryNotFound(_)));
    }

    #[test]
    fn test_window_boundaries() {
        // Full window is accepted
        assert!(select(&featured_frame(), "Nepal", 2022, 2030, DEFAULT_WINDOW).is_ok());
        // One year past either boundary is rejected
        let err = select(&featured_frame(), "Nepal", 2021, 2023, DEFAULT_WINDOW).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange { .. }));
        let err = select(&featured_frame(), "Nepal", 2023, 2031, DEFAULT_WINDOW).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange { .. }));
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let err = select(&featured_frame(), "Nepal", 2025, 2023, DEFAULT_WINDOW).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidRange { .. }));
    }

    #[test]
    fn test_country_check_precedes_range_check() {
        let err = select(&featured_frame(), "Atlantis", 2021, 2031, DEFAULT_WINDOW).unwrap_err();
        assert!(matches!(err, ForecastError::CountryNotFound(_)));
    }

    #[test]
    fn test_window_comes_from_the_artifact_not_a_constant() {
        let wide = YearWindow::new(2020, 2040);
        assert!(select(&featured_frame(), "Nepal", 2020, 2035, wide).is_ok());
    }
}
