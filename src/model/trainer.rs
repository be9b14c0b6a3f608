//! Offline model fitting.
//!
//! Not part of the serving path: the trainer produces a [`ModelArtifact`]
//! from a cleaned, featured dataset frame, and the pipeline only ever loads
//! that artifact.

use crate::dataset::features::{COL_MONTH, COL_YEAR};
use crate::dataset::loader::COL_AQI;
use crate::model::artifact::ModelArtifact;
use crate::model::error::ModelError;
use crate::model::regressor::{AqiModel, SeasonalOlsModel};
use crate::types::window::YearWindow;
use anofox_regression::prelude::*;
use log::info;
use polars::prelude::*;

/// Fitted coefficients: intercept + year trend + 11 month dummies.
const N_COEFFS: usize = 13;
/// Every n-th row is held out for evaluation.
const HOLDOUT_STRIDE: usize = 5;

/// Held-out evaluation of a training run. `mse` is `None` when the dataset
/// was too small to spare a holdout split.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub mse: Option<f64>,
    pub n_train: usize,
    pub n_test: usize,
}

/// Fits a [`SeasonalOlsModel`] on the `year`/`month`/`aqi_value` columns of a
/// featured frame and stamps the given coverage window onto the artifact.
///
/// The holdout split is deterministic (every [`HOLDOUT_STRIDE`]-th row), so
/// retraining on identical data reproduces the identical artifact.
pub fn train(
    frame: &DataFrame,
    window: YearWindow,
) -> Result<(ModelArtifact, TrainingReport), ModelError> {
    let years = frame.column(COL_YEAR)?.i32()?;
    let months = frame.column(COL_MONTH)?.i32()?;
    let values = frame.column(COL_AQI)?.f64()?;

    let mut rows: Vec<(i32, u32, f64)> = Vec::with_capacity(frame.height());
    for i in 0..frame.height() {
        if let (Some(year), Some(month), Some(value)) = (years.get(i), months.get(i), values.get(i))
        {
            rows.push((year, month as u32, value));
        }
    }
    if rows.len() < N_COEFFS {
        return Err(ModelError::InsufficientData {
            needed: N_COEFFS,
            got: rows.len(),
        });
    }

    let base_year = rows.iter().map(|r| f64::from(r.0)).sum::<f64>() / rows.len() as f64;

    let mut train_rows = Vec::with_capacity(rows.len());
    let mut test_rows = Vec::new();
    for (i, row) in rows.iter().enumerate() {
        if (i + 1) % HOLDOUT_STRIDE == 0 {
            test_rows.push(*row);
        } else {
            train_rows.push(*row);
        }
    }
    // Small datasets cannot spare a holdout; fit on everything instead.
    if train_rows.len() < N_COEFFS {
        train_rows = rows;
        test_rows.clear();
    }

    let model = fit(&train_rows, base_year)?;

    let mse = evaluate(&model, &test_rows)?;
    let report = TrainingReport {
        mse,
        n_train: train_rows.len(),
        n_test: test_rows.len(),
    };
    match report.mse {
        Some(mse) => info!(
            "Trained on {} rows, held-out MSE {:.4} over {} rows",
            report.n_train, mse, report.n_test
        ),
        None => info!("Trained on {} rows without a holdout split", report.n_train),
    }

    Ok((ModelArtifact { model, window }, report))
}

/// Fits OLS with intercept over the centered year and month-dummy features.
fn fit(rows: &[(i32, u32, f64)], base_year: f64) -> Result<SeasonalOlsModel, ModelError> {
    let n = rows.len();
    let k = N_COEFFS - 1; // regressors excluding the intercept

    let x_mat = faer::Mat::from_fn(n, k, |i, j| feature_at(rows[i], j, base_year));
    let y_col = faer::Col::from_fn(n, |i| rows[i].2);

    let fitted = OlsRegressor::builder()
        .with_intercept(true)
        .build()
        .fit(&x_mat, &y_col)
        .map_err(|e| ModelError::FitFailed(e.to_string()))?;

    let intercept = fitted.intercept().unwrap_or(0.0);
    let coeffs_col = fitted.coefficients();

    // coeffs_col[0] is the year trend; coeffs_col[1..=11] are the dummies
    // for February through December (January is the baseline).
    let year_coef = coeffs_col[0];
    let mut month_effects = [0.0f64; 12];
    for (idx, effect) in month_effects.iter_mut().enumerate().skip(1) {
        *effect = coeffs_col[idx];
    }

    Ok(SeasonalOlsModel {
        intercept,
        year_coef,
        month_effects,
        base_year,
    })
}

/// Design-matrix entry for regressor `j`: 0 is the centered year, 1..=11 are
/// the month dummies for months 2..=12.
fn feature_at(row: (i32, u32, f64), j: usize, base_year: f64) -> f64 {
    if j == 0 {
        f64::from(row.0) - base_year
    } else if row.1 == (j + 1) as u32 {
        1.0
    } else {
        0.0
    }
}

fn evaluate(
    model: &SeasonalOlsModel,
    test_rows: &[(i32, u32, f64)],
) -> Result<Option<f64>, ModelError> {
    if test_rows.is_empty() {
        return Ok(None);
    }
    let mut sum_sq = 0.0;
    for &(year, month, actual) in test_rows {
        let predicted = model.predict(year, month)?;
        sum_sq += (predicted - actual) * (predicted - actual);
    }
    Ok(Some(sum_sq / test_rows.len() as f64))
}
