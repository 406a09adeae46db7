//! Loader for the raw incident CSV.
//!
//! The raw export is latin-1 encoded, so the file is read as bytes and
//! decoded before it reaches the CSV parser. Parsing runs over an in-memory
//! cursor; column renames from [`schema::RAW_RENAMES`] are applied on the
//! parsed frame.

use crate::error::{PrepError, Result};
use crate::schema;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Rows scanned for schema inference; enough to see late-appearing nulls in
/// the coordinate columns.
const INFER_SCHEMA_ROWS: usize = 1000;

/// Loads the raw incident table and applies the fixed column renames.
pub struct IncidentLoader;

impl IncidentLoader {
    /// Load a raw incident CSV from disk.
    ///
    /// Fails if the file is missing or unparsable.
    pub fn load(path: &Path) -> Result<DataFrame> {
        if !path.exists() {
            return Err(PrepError::LoadFailed(format!(
                "input file not found: {}",
                path.display()
            )));
        }

        let bytes = std::fs::read(path)?;
        let content = decode_latin1(&bytes);
        let df = Self::read_csv(content)?;
        info!(
            "Loaded {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        Self::apply_renames(df)
    }

    /// Parse CSV content already decoded to UTF-8.
    fn read_csv(content: String) -> Result<DataFrame> {
        CsvReadOptions::default()
            .with_infer_schema_length(Some(INFER_SCHEMA_ROWS))
            .with_has_header(true)
            .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
            .into_reader_with_file_handle(Cursor::new(content))
            .finish()
            .map_err(|e| PrepError::LoadFailed(e.to_string()))
    }

    /// Rename raw columns per the fixed map; raw names absent from the frame
    /// are skipped.
    pub fn apply_renames(mut df: DataFrame) -> Result<DataFrame> {
        let present: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for (raw, renamed) in schema::RAW_RENAMES {
            if present.iter().any(|name| name == raw) {
                df.rename(raw, renamed.into())?;
                debug!("Renamed column '{}' -> '{}'", raw, renamed);
            }
        }

        Ok(df)
    }
}

/// Decode raw bytes as latin-1.
///
/// Valid UTF-8 passes through unchanged (ASCII files are a latin-1 subset);
/// otherwise each byte maps to its identical Unicode code point.
pub fn decode_latin1(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}
