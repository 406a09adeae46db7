//! Integration tests for the incident cleaning pipeline.
//!
//! These tests verify end-to-end behavior against a raw-schema CSV fixture.

use incident_prep::{
    ColumnPruner, Imputer, IncidentLoader, Pipeline, PipelineConfig, schema,
};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/incidents_subset.csv")
}

fn pipeline_with_output(output: &std::path::Path) -> Pipeline {
    Pipeline::builder()
        .config(
            PipelineConfig::builder()
                .output_path(output)
                .build()
                .unwrap(),
        )
        .build()
        .unwrap()
}

fn read_csv(path: &std::path::Path) -> DataFrame {
    CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .expect("Failed to create CSV reader")
        .finish()
        .expect("Failed to read CSV file")
}

// ============================================================================
// Full Pipeline Tests
// ============================================================================

#[test]
fn test_full_pipeline_produces_eleven_clean_columns() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("incidents_clean.csv");

    let report = pipeline_with_output(&output)
        .run(&fixture_path())
        .expect("pipeline should complete");

    assert_eq!(report.output_columns, 11);
    assert_eq!(report.output_rows, 10);
    assert!(report.validation.passed());

    let cleaned = read_csv(&output);
    assert_eq!(cleaned.width(), 11);
    let nulls: usize = cleaned.get_columns().iter().map(|c| c.null_count()).sum();
    assert_eq!(nulls, 0);

    let names: Vec<String> = cleaned
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
}

#[test]
fn test_full_pipeline_prunes_sparse_columns() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("incidents_clean.csv");

    let report = pipeline_with_output(&output).run(&fixture_path()).unwrap();

    let dropped: Vec<&str> = report
        .dropped_columns
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    // `motive` is renamed before pruning, `approxdate` never is
    assert!(dropped.contains(&"Motive"));
    assert!(dropped.contains(&"approxdate"));
    for col in &report.dropped_columns {
        assert!(col.missing_ratio > schema::MISSING_RATIO_THRESHOLD);
    }
}

#[test]
fn test_full_pipeline_output_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.csv");
    let second = dir.path().join("second.csv");

    pipeline_with_output(&first).run(&fixture_path()).unwrap();
    pipeline_with_output(&second).run(&fixture_path()).unwrap();

    assert!(read_csv(&first).equals(&read_csv(&second)));
}

#[test]
fn test_full_pipeline_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("incidents_clean.csv");

    let result = pipeline_with_output(&output).run(std::path::Path::new("does_not_exist.csv"));
    assert!(result.is_err());
    assert!(!output.exists(), "no partial output on failure");
}

// ============================================================================
// Renaming
// ============================================================================

#[test]
fn test_rename_is_total_over_the_map() {
    let df = IncidentLoader::load(&fixture_path()).unwrap();

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    // the fixture carries a subset of the raw schema; whatever was present
    // must now carry its cleaned name
    for (raw, _) in schema::RAW_RENAMES {
        assert!(
            !names.iter().any(|n| n == raw),
            "raw name '{raw}' survived renaming"
        );
    }
    for expected in ["Year", "Country", "Latitude", "GroupName", "Motive"] {
        assert!(names.iter().any(|n| n == expected));
    }
}

#[test]
fn test_raw_names_absent_from_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("incidents_clean.csv");
    pipeline_with_output(&output).run(&fixture_path()).unwrap();

    let cleaned = read_csv(&output);
    let names: Vec<String> = cleaned
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();
    for (raw, _) in schema::RAW_RENAMES {
        assert!(!names.iter().any(|n| n == raw));
    }
}

// ============================================================================
// Pruning
// ============================================================================

#[test]
fn test_retained_columns_stay_within_missing_threshold() {
    let df = IncidentLoader::load(&fixture_path()).unwrap();
    let pruner = ColumnPruner::new(schema::MISSING_RATIO_THRESHOLD);
    let (pruned, _) = pruner.prune(df).unwrap();

    // reconstruct the ratio on the pruned intermediate table
    for (name, ratio) in ColumnPruner::missing_ratios(&pruned) {
        assert!(
            ratio <= schema::MISSING_RATIO_THRESHOLD,
            "column '{name}' retained with missing ratio {ratio:.2}"
        );
    }
}

// ============================================================================
// Imputation
// ============================================================================

#[test]
fn test_imputed_values_match_column_statistics() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("incidents_clean.csv");
    pipeline_with_output(&output).run(&fixture_path()).unwrap();
    let cleaned = read_csv(&output);

    // Latitude gaps (rows 3 and 7) take the mean of the 8 observed values: 25.0
    let lat = cleaned.column("Latitude").unwrap();
    assert_eq!(lat.get(2).unwrap().try_extract::<f64>().unwrap(), 25.0);
    assert_eq!(lat.get(6).unwrap().try_extract::<f64>().unwrap(), 25.0);

    // GroupName gap (row 4) takes the mode: ETA appears five times
    let group = cleaned.column("GroupName").unwrap();
    assert_eq!(group.get(3).unwrap().to_string(), "\"ETA\"");

    // AttackType gap (row 5) takes the mode: Bombing appears six times
    let attack = cleaned.column("AttackType").unwrap();
    assert_eq!(attack.get(4).unwrap().to_string(), "\"Bombing\"");
}

#[test]
fn test_imputation_is_idempotent_on_fixture() {
    let df = IncidentLoader::load(&fixture_path()).unwrap();
    let pipeline = Pipeline::builder().build().unwrap();
    let (mut cleaned, _) = pipeline.process(df).unwrap();

    let once = cleaned.clone();
    let steps = Imputer::impute(&mut cleaned).unwrap();

    assert!(steps.is_empty(), "second imputation pass must be a no-op");
    assert!(cleaned.equals(&once));
}
