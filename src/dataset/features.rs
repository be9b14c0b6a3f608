//! Calendar feature derivation.

use crate::dataset::error::DatasetError;
use crate::dataset::loader::COL_DATE;
use polars::prelude::*;

pub(crate) const COL_YEAR: &str = "year";
pub(crate) const COL_MONTH: &str = "month";

/// Projects `year` and `month` columns from each record's date.
///
/// Pure and order-preserving; total over the loader's output, since every
/// surviving row carries a valid date.
pub fn with_calendar_features(frame: DataFrame) -> Result<DataFrame, DatasetError> {
    Ok(frame
        .lazy()
        .with_columns([
            col(COL_DATE).dt().year().cast(DataType::Int32).alias(COL_YEAR),
            col(COL_DATE).dt().month().cast(DataType::Int32).alias(COL_MONTH),
        ])
        .collect()?)
}
