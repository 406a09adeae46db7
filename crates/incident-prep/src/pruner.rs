//! Column pruning by missing-value ratio.

use crate::error::Result;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A column removed by the pruner, with the ratio that condemned it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DroppedColumn {
    pub name: String,
    pub missing_ratio: f64,
}

/// Drops columns whose missing ratio strictly exceeds a threshold.
pub struct ColumnPruner {
    threshold: f64,
}

impl ColumnPruner {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Per-column `null_count / row_count` for the current frame.
    pub fn missing_ratios(df: &DataFrame) -> Vec<(String, f64)> {
        let rows = df.height();
        df.get_columns()
            .iter()
            .map(|col| {
                let ratio = if rows == 0 {
                    0.0
                } else {
                    col.null_count() as f64 / rows as f64
                };
                (col.name().to_string(), ratio)
            })
            .collect()
    }

    /// Drop every column above the threshold; deterministic for fixed input.
    pub fn prune(&self, df: DataFrame) -> Result<(DataFrame, Vec<DroppedColumn>)> {
        let dropped: Vec<DroppedColumn> = Self::missing_ratios(&df)
            .into_iter()
            .filter(|(_, ratio)| *ratio > self.threshold)
            .map(|(name, missing_ratio)| DroppedColumn { name, missing_ratio })
            .collect();

        if dropped.is_empty() {
            info!(
                "No columns exceed {:.0}% missing threshold",
                self.threshold * 100.0
            );
            return Ok((df, dropped));
        }

        let names: Vec<PlSmallStr> = dropped
            .iter()
            .map(|col| col.name.as_str().into())
            .collect();
        let df = df.drop_many(names);

        for col in &dropped {
            debug!(
                "Dropped '{}' ({:.1}% missing)",
                col.name,
                col.missing_ratio * 100.0
            );
        }
        info!(
            "Dropped {} columns with >{:.0}% missing values",
            dropped.len(),
            self.threshold * 100.0
        );

        Ok((df, dropped))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn sparse_frame() -> DataFrame {
        df![
            "full" => [Some(1i64), Some(2), Some(3), Some(4), Some(5)],
            "sparse" => [Some("a"), None, None, None, None],
            "borderline" => [Some(1.0), Some(2.0), Some(3.0), Some(4.0), None],
        ]
        .unwrap()
    }

    #[test]
    fn test_missing_ratios() {
        let ratios = ColumnPruner::missing_ratios(&sparse_frame());
        assert_eq!(ratios[0], ("full".to_string(), 0.0));
        assert_eq!(ratios[1], ("sparse".to_string(), 0.8));
        assert_eq!(ratios[2], ("borderline".to_string(), 0.2));
    }

    #[test]
    fn test_prune_drops_only_columns_above_threshold() {
        let pruner = ColumnPruner::new(schema::MISSING_RATIO_THRESHOLD);
        let (df, dropped) = pruner.prune(sparse_frame()).unwrap();

        assert_eq!(df.width(), 2);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].name, "sparse");
        assert_eq!(dropped[0].missing_ratio, 0.8);

        // threshold is strict: exactly 20% missing survives
        assert!(df.column("borderline").is_ok());
    }

    #[test]
    fn test_retained_columns_all_within_threshold() {
        let pruner = ColumnPruner::new(0.20);
        let (df, _) = pruner.prune(sparse_frame()).unwrap();

        for (name, ratio) in ColumnPruner::missing_ratios(&df) {
            assert!(ratio <= 0.20, "column '{name}' kept with ratio {ratio}");
        }
    }

    #[test]
    fn test_prune_is_deterministic() {
        let pruner = ColumnPruner::new(0.20);
        let (a, _) = pruner.prune(sparse_frame()).unwrap();
        let (b, _) = pruner.prune(sparse_frame()).unwrap();
        assert!(a.equals_missing(&b));
    }

    #[test]
    fn test_prune_empty_frame() {
        let pruner = ColumnPruner::new(0.20);
        let (df, dropped) = pruner.prune(DataFrame::empty()).unwrap();
        assert_eq!(df.width(), 0);
        assert!(dropped.is_empty());
    }
}
