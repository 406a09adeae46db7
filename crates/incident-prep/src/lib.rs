//! Incident Dataset Cleaning Pipeline
//!
//! A one-shot batch pipeline built with Rust and Polars that turns the raw
//! 135-column incident export into a fixed 11-column training table.
//!
//! # Overview
//!
//! The pipeline is a straight line of six stages:
//!
//! - **Loader**: reads the latin-1 raw CSV and applies the fixed column renames
//! - **Column Pruner**: drops columns with more than 20% missing values
//! - **Feature Selector**: projects onto 10 predictors plus the target column
//! - **Imputer**: mean-fills coordinates, mode-fills everything else
//! - **Validator**: checks shape, dtypes and the zero-missing invariant
//! - **Writer**: serializes the cleaned table to CSV without an index column
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use incident_prep::{Pipeline, PipelineConfig};
//!
//! let report = Pipeline::builder()
//!     .config(
//!         PipelineConfig::builder()
//!             .missing_column_threshold(0.20)
//!             .output_path("output/incidents_clean.csv")
//!             .build()?,
//!     )
//!     .build()?
//!     .run("globalterrorismdb.csv".as_ref())?;
//!
//! println!(
//!     "{} rows x {} columns, {} columns dropped",
//!     report.output_rows,
//!     report.output_columns,
//!     report.dropped_columns.len()
//! );
//! ```
//!
//! Every failure is fatal: the pipeline has no retry or partial-completion
//! semantics, a run either produces a fully valid output file or aborts.

pub mod config;
pub mod error;
pub mod imputer;
pub mod loader;
pub mod pipeline;
pub mod pruner;
pub mod schema;
pub mod selector;
pub mod utils;
pub mod validator;
pub mod writer;

// Re-exports for convenient access
pub use config::{ConfigValidationError, PipelineConfig, PipelineConfigBuilder};
pub use error::{PrepError, Result as PrepResult, ResultExt};
pub use imputer::Imputer;
pub use loader::{IncidentLoader, decode_latin1};
pub use pipeline::{Pipeline, PipelineBuilder, RunReport};
pub use pruner::{ColumnPruner, DroppedColumn};
pub use selector::FeatureSelector;
pub use validator::{ColumnCheck, TableValidator, ValidationReport};
pub use writer::OutputWriter;
