//! Gap filling for the selected feature table.
//!
//! Coordinate columns get the arithmetic mean of their non-null values;
//! every other column with gaps gets its most frequent value, ties broken by
//! first appearance in row order. A second pass over an already-imputed
//! table is a no-op.

use crate::error::{PrepError, Result};
use crate::schema;
use crate::utils::{
    fill_numeric_nulls, fill_string_nulls, is_numeric_dtype, numeric_mode_first_seen,
    string_mode_first_seen,
};
use polars::prelude::*;
use tracing::{debug, info};

/// Statistical imputer for the cleaned incident table.
pub struct Imputer;

impl Imputer {
    /// Fill every remaining gap in the frame, returning the steps applied.
    pub fn impute(df: &mut DataFrame) -> Result<Vec<String>> {
        let mut steps = Vec::new();

        // fixed numeric subset first
        for col_name in schema::MEAN_IMPUTED_COLUMNS {
            if df.column(col_name).is_ok() {
                Self::impute_numeric_mean(df, col_name, &mut steps)?;
            }
        }

        // everything else falls back to first-seen mode
        let remaining: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .filter(|name| !schema::MEAN_IMPUTED_COLUMNS.contains(&name.as_str()))
            .collect();

        for col_name in remaining {
            Self::impute_mode(df, &col_name, &mut steps)?;
        }

        if steps.is_empty() {
            info!("No missing values to impute");
        } else {
            info!("Applied {} imputation steps", steps.len());
        }

        Ok(steps)
    }

    /// Replace nulls in a numeric column with the mean of its non-null values.
    pub fn impute_numeric_mean(
        df: &mut DataFrame,
        col_name: &str,
        steps: &mut Vec<String>,
    ) -> Result<()> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        if series.null_count() == 0 {
            return Ok(());
        }

        let mean = series.mean().ok_or_else(|| PrepError::ImputationFailed {
            column: col_name.to_string(),
            reason: "no non-missing values to average".to_string(),
        })?;

        let filled = fill_numeric_nulls(&series, mean)?.cast(&DataType::Float64)?;
        df.replace(col_name, filled)?;

        steps.push(format!("Filled '{}' with mean: {:.4}", col_name, mean));
        debug!("Mean imputed '{}' with {:.4}", col_name, mean);
        Ok(())
    }

    /// Replace nulls with the most frequent non-null value, preserving the
    /// column dtype. Ties break toward the value seen first in row order.
    pub fn impute_mode(df: &mut DataFrame, col_name: &str, steps: &mut Vec<String>) -> Result<()> {
        let series = df.column(col_name)?.as_materialized_series().clone();
        if series.null_count() == 0 {
            return Ok(());
        }

        if is_numeric_dtype(series.dtype()) {
            let mode = numeric_mode_first_seen(&series).ok_or_else(|| {
                PrepError::ImputationFailed {
                    column: col_name.to_string(),
                    reason: "no non-missing values to count".to_string(),
                }
            })?;
            let filled = fill_numeric_nulls(&series, mode)?.cast(series.dtype())?;
            df.replace(col_name, filled)?;
            steps.push(format!("Filled '{}' with mode: {}", col_name, mode));
            debug!("Mode imputed '{}' with {}", col_name, mode);
        } else {
            let mode = string_mode_first_seen(&series).ok_or_else(|| {
                PrepError::ImputationFailed {
                    column: col_name.to_string(),
                    reason: "no non-missing values to count".to_string(),
                }
            })?;
            let filled = fill_string_nulls(&series, &mode)?;
            df.replace(col_name, filled)?;
            steps.push(format!("Filled '{}' with mode: '{}'", col_name, mode));
            debug!("Mode imputed '{}' with '{}'", col_name, mode);
        }

        Ok(())
    }
}
