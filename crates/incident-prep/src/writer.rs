//! Serialization of the cleaned table.

use crate::error::Result;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;
use tracing::info;

/// Writes the cleaned table to a flat CSV file.
pub struct OutputWriter;

impl OutputWriter {
    /// Write the frame as CSV with a header row and no index column.
    ///
    /// Parent directories are created as needed; an existing file is
    /// overwritten.
    pub fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .with_separator(b',')
            .with_quote_char(b'"')
            .finish(df)?;

        info!("Cleaned dataset saved: {}", path.display());
        Ok(())
    }
}
