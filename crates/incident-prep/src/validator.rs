//! Output invariants check for the cleaned table.
//!
//! Purely diagnostic: the validator reports violations without mutating the
//! frame. The pipeline treats any reported issue as fatal.

use crate::error::Result;
use crate::schema::{self, DtypeClass};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Per-column observation recorded during validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnCheck {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
}

/// Diagnostic result of validating the cleaned table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnCheck>,
    pub issues: Vec<String>,
}

impl ValidationReport {
    /// Whether the table satisfies every output invariant.
    pub fn passed(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Validates the cleaned table against the fixed output schema.
pub struct TableValidator;

impl TableValidator {
    /// Check shape, column order, dtypes, nulls and empty strings.
    pub fn validate(df: &DataFrame) -> Result<ValidationReport> {
        let mut issues = Vec::new();

        if df.height() == 0 {
            issues.push("table has no rows".to_string());
        }

        if df.width() != schema::OUTPUT_SCHEMA.len() {
            issues.push(format!(
                "expected {} columns, found {}",
                schema::OUTPUT_SCHEMA.len(),
                df.width()
            ));
        }

        let actual_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let expected_names: Vec<&str> = schema::OUTPUT_SCHEMA.iter().map(|(n, _)| *n).collect();
        if actual_names != expected_names {
            issues.push(format!(
                "column order mismatch: expected {:?}, found {:?}",
                expected_names, actual_names
            ));
        }

        let mut columns = Vec::new();
        for (name, class) in schema::OUTPUT_SCHEMA {
            let Ok(col) = df.column(name) else {
                // already covered by the order mismatch above
                continue;
            };
            let series = col.as_materialized_series();
            let null_count = series.null_count();

            columns.push(ColumnCheck {
                name: name.to_string(),
                dtype: format!("{:?}", series.dtype()),
                null_count,
            });

            if null_count > 0 {
                issues.push(format!("column '{}' has {} missing values", name, null_count));
            }

            if !class.matches(series.dtype()) {
                issues.push(format!(
                    "column '{}' is {:?}, expected {}",
                    name,
                    series.dtype(),
                    class.display_name()
                ));
            }

            if class == DtypeClass::Text
                && let Ok(str_chunked) = series.str()
            {
                let empty = str_chunked
                    .into_iter()
                    .flatten()
                    .filter(|v| v.trim().is_empty())
                    .count();
                if empty > 0 {
                    issues.push(format!("column '{}' has {} empty strings", name, empty));
                }
            }
        }

        if issues.is_empty() {
            debug!("Validation passed: {} rows x {} columns", df.height(), df.width());
        } else {
            for issue in &issues {
                warn!("Validation issue: {}", issue);
            }
        }

        Ok(ValidationReport {
            row_count: df.height(),
            column_count: df.width(),
            columns,
            issues,
        })
    }
}
