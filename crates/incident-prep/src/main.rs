//! CLI entry point for the incident cleaning pipeline.

use anyhow::{Result, anyhow};
use clap::Parser;
use incident_prep::{Pipeline, PipelineConfig, RunReport};
use std::path::Path;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Incident dataset cleaning pipeline",
    long_about = "Cleans the raw incident CSV export into a fixed 11-column table.\n\n\
                  EXAMPLES:\n  \
                  # Clean with defaults\n  \
                  incident-prep -i globalterrorismdb.csv\n\n  \
                  # Custom output path and threshold\n  \
                  incident-prep -i raw.csv -o clean.csv --missing-threshold 0.3\n\n  \
                  # Machine-readable run report\n  \
                  incident-prep -i raw.csv --json | jq .output_rows"
)]
struct Args {
    /// Path to the raw incident CSV (latin-1 encoded)
    #[arg(short, long)]
    input: String,

    /// Path the cleaned CSV is written to
    #[arg(short, long, default_value = "output/incidents_clean.csv")]
    output: String,

    /// Missing-ratio threshold above which columns are dropped (0.0 - 1.0)
    #[arg(long, default_value = "0.2")]
    missing_threshold: f64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show warnings and errors)
    #[arg(short, long)]
    quiet: bool,

    /// Output the run report as JSON to stdout instead of a summary
    ///
    /// Disables all progress logs; only the JSON report reaches stdout.
    #[arg(long)]
    json: bool,
}

/// Initialize the tracing subscriber for logging.
///
/// When `json_output` is true, logging is completely disabled to ensure
/// only JSON is written to stdout.
fn init_logging(level: &str, quiet: bool, json_output: bool) {
    if json_output {
        return;
    }

    use tracing_subscriber::EnvFilter;

    let effective_level = if quiet { "warn" } else { level };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(effective_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    if !Path::new(&args.input).exists() {
        return Err(anyhow!("Input file not found: {}", args.input));
    }

    let config = PipelineConfig::builder()
        .missing_column_threshold(args.missing_threshold)
        .output_path(&args.output)
        .build()?;

    let pipeline = Pipeline::builder().config(config).build()?;

    info!("Cleaning {} -> {}", args.input, args.output);
    match pipeline.run(Path::new(&args.input)) {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_summary(&report, &args);
            }
            Ok(())
        }
        Err(e) => {
            error!("Pipeline failed: {}", e);
            Err(anyhow!("Pipeline failed: {}", e))
        }
    }
}

/// Print a human-readable summary of the run.
///
/// Uses `println!` intentionally: this is the primary CLI output and should
/// be visible regardless of log level settings.
fn print_summary(report: &RunReport, args: &Args) {
    println!();
    println!("{}", "=".repeat(80));
    println!("CLEANING COMPLETE");
    println!("{}", "=".repeat(80));
    println!();

    println!(
        "Input:  {} ({} rows x {} columns)",
        args.input, report.input_rows, report.input_columns
    );
    println!(
        "Output: {} ({} rows x {} columns)",
        report.output_path.as_deref().unwrap_or(&args.output),
        report.output_rows,
        report.output_columns
    );
    println!();

    println!("Processing Summary:");
    println!("  Duration: {}ms", report.duration_ms);
    println!(
        "  Columns: {} -> {} ({} dropped by pruning, rest by selection)",
        report.input_columns,
        report.output_columns,
        report.dropped_columns.len()
    );
    if !report.dropped_columns.is_empty() {
        for col in &report.dropped_columns {
            println!(
                "    - {} ({:.1}% missing)",
                col.name,
                col.missing_ratio * 100.0
            );
        }
    }
    println!();

    if !report.imputation_steps.is_empty() {
        println!("Imputation:");
        for step in &report.imputation_steps {
            println!("  - {}", step);
        }
        println!();
    }

    println!(
        "Validation: {} rows, {} columns, 0 missing values",
        report.validation.row_count, report.validation.column_count
    );
    println!();
    println!("Use --json for machine-readable output");
    println!("{}", "=".repeat(80));
}
