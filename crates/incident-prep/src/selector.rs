//! Projection onto the fixed feature subset.

use crate::error::{PrepError, Result};
use crate::schema;
use polars::prelude::*;
use tracing::info;

/// Projects the pruned table onto the 10 predictors plus the target column,
/// in the fixed output order.
pub struct FeatureSelector;

impl FeatureSelector {
    /// Select the feature and target columns.
    ///
    /// Fails with [`PrepError::ColumnNotFound`] if any expected column is
    /// absent after renaming and pruning.
    pub fn select(df: &DataFrame) -> Result<DataFrame> {
        let present: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for name in schema::FEATURE_COLUMNS
            .iter()
            .chain(std::iter::once(&schema::TARGET_COLUMN))
        {
            if !present.iter().any(|col| col == name) {
                return Err(PrepError::ColumnNotFound((*name).to_string()));
            }
        }

        let selected = df.select(schema::output_columns())?;
        info!(
            "Selected {} predictor columns + target '{}'",
            schema::FEATURE_COLUMNS.len(),
            schema::TARGET_COLUMN
        );
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frame() -> DataFrame {
        df![
            "extra" => [1i64, 2],
            "GroupName" => ["ETA", "IRA"],
            "Year" => [1970i64, 1971],
            "Month" => [7i64, 8],
            "Country" => ["Spain", "Ireland"],
            "Region" => ["Western Europe", "Western Europe"],
            "Latitude" => [40.4, 53.3],
            "Longitude" => [-3.7, -6.2],
            "AttackType" => ["Bombing", "Assassination"],
            "TargetType" => ["Police", "Government"],
            "WeaponType" => ["Explosives", "Firearms"],
            "suicide" => [0i64, 0],
        ]
        .unwrap()
    }

    #[test]
    fn test_select_projects_in_fixed_order() {
        let selected = FeatureSelector::select(&full_frame()).unwrap();

        let names: Vec<String> = selected
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(
            names,
            vec![
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
                "GroupName"
            ]
        );
        assert_eq!(selected.width(), 11);
    }

    #[test]
    fn test_select_drops_unlisted_columns() {
        let selected = FeatureSelector::select(&full_frame()).unwrap();
        assert!(selected.column("extra").is_err());
    }

    #[test]
    fn test_select_missing_column_fails() {
        let df = df!["Year" => [1970i64]].unwrap();
        let err = FeatureSelector::select(&df).unwrap_err();
        assert!(matches!(err, PrepError::ColumnNotFound(_)));
        assert!(err.to_string().contains("Month"));
    }
}
