//! Fixed schema of the raw incident dataset and the cleaned output.
//!
//! The raw file is the 135-column incident export; the pipeline only ever
//! touches the columns named here. Keeping the rename map, feature list and
//! threshold as named constants makes each stage testable in isolation.

use polars::prelude::*;

/// Raw column name -> cleaned column name.
///
/// Renaming is total over this map: every raw name present in the input is
/// renamed, raw names absent from the input are skipped.
pub const RAW_RENAMES: [(&str, &str); 17] = [
    ("iyear", "Year"),
    ("imonth", "Month"),
    ("iday", "Day"),
    ("country_txt", "Country"),
    ("region_txt", "Region"),
    ("city", "City"),
    ("latitude", "Latitude"),
    ("longitude", "Longitude"),
    ("attacktype1_txt", "AttackType"),
    ("targtype1_txt", "TargetType"),
    ("target1", "Target"),
    ("weaptype1_txt", "WeaponType"),
    ("gname", "GroupName"),
    ("nkill", "Killed"),
    ("nwound", "Wounded"),
    ("summary", "Summary"),
    ("motive", "Motive"),
];

/// Predictor columns kept in the final table, in output order.
pub const FEATURE_COLUMNS: [&str; 10] = [
    "Year",
    "Month",
    "Country",
    "Region",
    "Latitude",
    "Longitude",
    "AttackType",
    "TargetType",
    "WeaponType",
    "suicide",
];

/// Target column, appended after the predictors.
pub const TARGET_COLUMN: &str = "GroupName";

/// Numeric columns imputed with the column mean; everything else falls back
/// to first-seen mode.
pub const MEAN_IMPUTED_COLUMNS: [&str; 2] = ["Latitude", "Longitude"];

/// Columns whose missing ratio strictly exceeds this are dropped.
pub const MISSING_RATIO_THRESHOLD: f64 = 0.20;

/// Broad dtype class a cleaned column must land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtypeClass {
    Integer,
    Float,
    Text,
}

impl DtypeClass {
    /// Whether a concrete polars dtype satisfies this class.
    pub fn matches(&self, dtype: &DataType) -> bool {
        match self {
            DtypeClass::Integer => matches!(
                dtype,
                DataType::Int8
                    | DataType::Int16
                    | DataType::Int32
                    | DataType::Int64
                    | DataType::UInt8
                    | DataType::UInt16
                    | DataType::UInt32
                    | DataType::UInt64
            ),
            DtypeClass::Float => matches!(dtype, DataType::Float32 | DataType::Float64),
            DtypeClass::Text => matches!(dtype, DataType::String | DataType::Categorical(_, _)),
        }
    }

    /// Human readable name for diagnostics.
    pub fn display_name(&self) -> &'static str {
        match self {
            DtypeClass::Integer => "integer",
            DtypeClass::Float => "float",
            DtypeClass::Text => "text",
        }
    }
}

/// Expected shape of the cleaned table: 10 predictors plus the target,
/// in this exact order.
pub const OUTPUT_SCHEMA: [(&str, DtypeClass); 11] = [
    ("Year", DtypeClass::Integer),
    ("Month", DtypeClass::Integer),
    ("Country", DtypeClass::Text),
    ("Region", DtypeClass::Text),
    ("Latitude", DtypeClass::Float),
    ("Longitude", DtypeClass::Float),
    ("AttackType", DtypeClass::Text),
    ("TargetType", DtypeClass::Text),
    ("WeaponType", DtypeClass::Text),
    ("suicide", DtypeClass::Integer),
    ("GroupName", DtypeClass::Text),
];

/// The full output column list (`FEATURE_COLUMNS` + target) as polars names.
pub fn output_columns() -> Vec<PlSmallStr> {
    FEATURE_COLUMNS
        .iter()
        .map(|c| PlSmallStr::from(*c))
        .chain(std::iter::once(PlSmallStr::from(TARGET_COLUMN)))
        .collect()
}
