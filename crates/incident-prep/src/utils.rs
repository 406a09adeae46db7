//! Shared utilities for the cleaning pipeline.
//!
//! Dtype checks, null-fill helpers, and the first-seen mode statistic used
//! by the imputer.

use polars::prelude::*;
use std::collections::HashMap;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

// =============================================================================
// Series Statistics Utilities
// =============================================================================

/// Most frequent value of a string Series; ties break toward the value seen
/// first in row order. Returns `None` when every value is null.
pub fn string_mode_first_seen(series: &Series) -> Option<String> {
    let str_series = series.cast(&DataType::String).ok()?;
    let str_chunked = str_series.str().ok()?;

    // (count, first row index) per value; first-seen order decides ties
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    for (idx, val) in str_chunked.into_iter().enumerate() {
        if let Some(val) = val {
            let entry = counts.entry(val.to_string()).or_insert((0, idx));
            entry.0 += 1;
        }
    }

    counts
        .into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
        .map(|(val, _)| val)
}

/// Most frequent value of a numeric Series; ties break toward the value seen
/// first in row order. Returns `None` when every value is null.
pub fn numeric_mode_first_seen(series: &Series) -> Option<f64> {
    let null_mask = series.is_null();

    // f64 bit patterns as keys; nulls are skipped so NaN never enters
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for i in 0..series.len() {
        if null_mask.get(i).unwrap_or(true) {
            continue;
        }
        let val = series.get(i).ok()?.try_extract::<f64>().ok()?;
        let entry = counts.entry(val.to_bits()).or_insert((0, i));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
        .map(|(bits, _)| f64::from_bits(bits))
}

// =============================================================================
// Series Transformation Utilities
// =============================================================================

/// Fill null values in a numeric Series with a specific value.
///
/// The result is Float64; callers cast back when the source dtype matters.
pub fn fill_numeric_nulls(series: &Series, fill_value: f64) -> PolarsResult<Series> {
    let mask = series.is_null();
    let len = series.len();
    let mut result_vec = Vec::with_capacity(len);

    for i in 0..len {
        if mask.get(i).unwrap_or(false) {
            result_vec.push(Some(fill_value));
        } else {
            let val = series.get(i)?;
            result_vec.push(Some(val.try_extract::<f64>()?));
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}

/// Fill null values in a string Series with a specific value.
pub fn fill_string_nulls(series: &Series, fill_value: &str) -> PolarsResult<Series> {
    let str_series = series.cast(&DataType::String)?;
    let str_chunked = str_series.str()?;
    let len = series.len();
    let mut result_vec: Vec<Option<String>> = Vec::with_capacity(len);

    for val in str_chunked.into_iter() {
        match val {
            Some(v) => result_vec.push(Some(v.to_string())),
            None => result_vec.push(Some(fill_value.to_string())),
        }
    }

    Ok(Series::new(series.name().clone(), result_vec))
}
