//! Configuration for the cleaning pipeline.
//!
//! Uses the builder pattern for ergonomic setup; thresholds are validated
//! at build time so a bad configuration fails before any data is touched.

use crate::schema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the cleaning pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use incident_prep::PipelineConfig;
///
/// let config = PipelineConfig::builder()
///     .missing_column_threshold(0.20)
///     .output_path("output/incidents_clean.csv")
///     .build()?;
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Columns whose missing ratio strictly exceeds this are dropped (0.0 - 1.0).
    /// Default: 0.20
    pub missing_column_threshold: f64,

    /// Path the cleaned CSV is written to.
    /// Default: "output/incidents_clean.csv"
    pub output_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            missing_column_threshold: schema::MISSING_RATIO_THRESHOLD,
            output_path: PathBuf::from("output/incidents_clean.csv"),
        }
    }
}

impl PipelineConfig {
    /// Create a new configuration builder.
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !(0.0..=1.0).contains(&self.missing_column_threshold) {
            return Err(ConfigValidationError::InvalidThreshold {
                field: "missing_column_threshold".to_string(),
                value: self.missing_column_threshold,
            });
        }
        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid threshold for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidThreshold { field: String, value: f64 },
}

/// Builder for [`PipelineConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    missing_column_threshold: Option<f64>,
    output_path: Option<PathBuf>,
}

impl PipelineConfigBuilder {
    /// Set the missing-ratio threshold above which a column is dropped.
    ///
    /// # Arguments
    /// * `threshold` - Value between 0.0 and 1.0 (e.g., 0.20 = 20%)
    pub fn missing_column_threshold(mut self, threshold: f64) -> Self {
        self.missing_column_threshold = Some(threshold);
        self
    }

    /// Set the path the cleaned CSV is written to.
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `PipelineConfig` or an error if validation fails.
    pub fn build(self) -> Result<PipelineConfig, ConfigValidationError> {
        let config = PipelineConfig {
            missing_column_threshold: self
                .missing_column_threshold
                .unwrap_or(schema::MISSING_RATIO_THRESHOLD),
            output_path: self
                .output_path
                .unwrap_or_else(|| PathBuf::from("output/incidents_clean.csv")),
        };

        config.validate()?;
        Ok(config)
    }
}
