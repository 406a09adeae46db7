//! Pipeline orchestration.
//!
//! Wires the six stages together: load, prune, select, impute, validate,
//! write. Each run rebuilds the table from the raw source; the only state
//! that survives is the overwritten output file.

use crate::config::PipelineConfig;
use crate::error::{PrepError, Result};
use crate::imputer::Imputer;
use crate::loader::IncidentLoader;
use crate::pruner::{ColumnPruner, DroppedColumn};
use crate::selector::FeatureSelector;
use crate::validator::{TableValidator, ValidationReport};
use crate::writer::OutputWriter;
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::info;

/// Summary of a completed run, serializable for machine consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Timestamp when the report was generated.
    pub generated_at: String,
    /// Rows in the table entering the pipeline.
    pub input_rows: usize,
    /// Columns in the table entering the pipeline.
    pub input_columns: usize,
    /// Rows in the cleaned table.
    pub output_rows: usize,
    /// Columns in the cleaned table.
    pub output_columns: usize,
    /// Columns removed by the pruner.
    pub dropped_columns: Vec<DroppedColumn>,
    /// Imputation steps applied, in order.
    pub imputation_steps: Vec<String>,
    /// Diagnostic validation report for the cleaned table.
    pub validation: ValidationReport,
    /// Total execution time in milliseconds.
    pub duration_ms: u64,
    /// Path the cleaned CSV was written to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<String>,
}

/// The cleaning pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use incident_prep::{Pipeline, PipelineConfig};
///
/// let report = Pipeline::builder()
///     .config(PipelineConfig::default())
///     .build()?
///     .run("globalterrorismdb.csv".as_ref())?;
///
/// println!("{} rows cleaned", report.output_rows);
/// ```
pub struct Pipeline {
    config: PipelineConfig,
    pruner: ColumnPruner,
}

impl Pipeline {
    /// Create a new pipeline builder.
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::default()
    }

    /// Run the full pipeline: load the raw file, clean it, write the output.
    pub fn run(&self, input: &Path) -> Result<RunReport> {
        let start = Instant::now();

        info!("Step 1: Loading raw dataset...");
        let df = IncidentLoader::load(input)?;

        let (mut df, mut report) = self.process(df)?;

        info!("Step 6: Writing cleaned dataset...");
        OutputWriter::write_csv(&mut df, &self.config.output_path)?;
        report.output_path = Some(self.config.output_path.display().to_string());
        report.duration_ms = start.elapsed().as_millis() as u64;

        info!(
            "Pipeline complete: {} rows x {} columns in {}ms",
            report.output_rows, report.output_columns, report.duration_ms
        );

        Ok(report)
    }

    /// Run the in-memory stages (prune, select, impute, validate) on an
    /// already-loaded table.
    pub fn process(&self, df: DataFrame) -> Result<(DataFrame, RunReport)> {
        let start = Instant::now();
        let input_rows = df.height();
        let input_columns = df.width();

        info!("Step 2: Pruning sparse columns...");
        let (df, dropped_columns) = self.pruner.prune(df)?;

        info!("Step 3: Selecting feature columns...");
        let mut df = FeatureSelector::select(&df)?;

        info!("Step 4: Imputing missing values...");
        let imputation_steps = Imputer::impute(&mut df)?;

        info!("Step 5: Validating cleaned table...");
        let validation = TableValidator::validate(&df)?;
        if !validation.passed() {
            return Err(PrepError::ValidationFailed(validation.issues.join("; ")));
        }

        let report = RunReport {
            generated_at: Local::now().to_rfc3339(),
            input_rows,
            input_columns,
            output_rows: df.height(),
            output_columns: df.width(),
            dropped_columns,
            imputation_steps,
            validation,
            duration_ms: start.elapsed().as_millis() as u64,
            output_path: None,
        };

        Ok((df, report))
    }
}

/// Builder for creating a [`Pipeline`] instance.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: Option<PipelineConfig>,
}

impl PipelineBuilder {
    /// Set the pipeline configuration.
    pub fn config(mut self, config: PipelineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the pipeline, validating the configuration.
    pub fn build(self) -> Result<Pipeline> {
        let config = self.config.unwrap_or_default();
        config
            .validate()
            .map_err(|e| PrepError::InvalidConfig(e.to_string()))?;

        let pruner = ColumnPruner::new(config.missing_column_threshold);
        Ok(Pipeline { config, pruner })
    }
}
