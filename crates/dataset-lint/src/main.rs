use anyhow::{Context, Result, anyhow};
use clap::Parser;
use dataset_lint::config::{
    DEFAULT_CORR_THRESHOLD, DEFAULT_DOMINANCE_THRESHOLD, DEFAULT_DUPLICATE_THRESHOLD,
    DEFAULT_ID_RATIO, DEFAULT_MIN_GROUP_PCT, DEFAULT_MISSING_THRESHOLD,
    DEFAULT_RARE_COUNT_THRESHOLD,
};
use dataset_lint::loader::clean_input_path;
use dataset_lint::reporting::{
    LintReport, render_class_distribution, render_dataset_summary, render_findings,
    render_target_status, write_report_to_file,
};
use dataset_lint::{LintConfig, TargetStatus, load_dataset, run_checks};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Data-quality linter for machine learning datasets",
    long_about = "Checks a tabular dataset for problems that hurt model training:\n\
                  missing values, duplicates, constant columns, class imbalance,\n\
                  target leakage, representation bias and trainability.\n\n\
                  EXAMPLES:\n  \
                  # Structural checks only\n  \
                  dataset-lint data.csv\n\n  \
                  # Include target-aware checks\n  \
                  dataset-lint data.csv --target Survived\n\n  \
                  # Interactive: prompts for the path and target\n  \
                  dataset-lint\n\n  \
                  # Machine-readable output\n  \
                  dataset-lint data.csv --target label --json | jq .counts"
)]
struct Args {
    /// Path to the dataset (CSV, TSV or Parquet)
    ///
    /// If omitted, the path is read from stdin
    input: Option<String>,

    /// Target column for target-aware checks
    #[arg(short, long)]
    target: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Suppress progress output (only show errors and the report)
    #[arg(short, long)]
    quiet: bool,

    /// Percent of missing values above which a column is flagged
    #[arg(long, default_value_t = DEFAULT_MISSING_THRESHOLD)]
    missing_threshold: f64,

    /// Percent of duplicate rows above which the dataset is flagged
    #[arg(long, default_value_t = DEFAULT_DUPLICATE_THRESHOLD)]
    duplicate_threshold: f64,

    /// Majority class percent above which the target is flagged
    #[arg(long, default_value_t = DEFAULT_DOMINANCE_THRESHOLD)]
    dominance_threshold: f64,

    /// Classes with fewer samples than this are flagged as rare
    #[arg(long, default_value_t = DEFAULT_RARE_COUNT_THRESHOLD)]
    rare_count: usize,

    /// Absolute correlation with the target above which a feature is flagged (0.0 - 1.0)
    #[arg(long, default_value_t = DEFAULT_CORR_THRESHOLD)]
    corr_threshold: f64,

    /// Distinct-to-rows ratio above which a feature looks like an identifier (0.0 - 1.0)
    #[arg(long, default_value_t = DEFAULT_ID_RATIO)]
    id_ratio: f64,

    /// Group share (percent) below which a sensitive group is flagged
    #[arg(long, default_value_t = DEFAULT_MIN_GROUP_PCT)]
    min_group_pct: f64,

    /// Output JSON to stdout instead of the human-readable report
    ///
    /// Disables all progress logs; only outputs the final JSON report.
    #[arg(long)]
    json: bool,

    /// Write a JSON report to this file
    #[arg(short = 'r', long, value_name = "FILE")]
    emit_report: Option<PathBuf>,
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
        .with_writer(io::stderr)
        .init();
}

/// Print `message` and read one trimmed line from stdin.
fn prompt(message: &str) -> Result<String> {
    print!("{} ", message);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level, args.quiet, args.json);

    // Interactive mode: path and target come from stdin
    let interactive = args.input.is_none();
    let input = match &args.input {
        Some(path) => clean_input_path(path),
        None => clean_input_path(&prompt("Enter the dataset path (or drop the file):")?),
    };
    if input.as_os_str().is_empty() {
        return Err(anyhow!("No dataset path given"));
    }

    let target = match args.target.clone() {
        Some(target) => Some(target),
        None if interactive => {
            let answer = prompt("Enter the target column (leave blank to skip):")?;
            (!answer.is_empty()).then_some(answer)
        }
        None => None,
    };

    let mut builder = LintConfig::builder()
        .missing_threshold(args.missing_threshold)
        .duplicate_threshold(args.duplicate_threshold)
        .dominance_threshold(args.dominance_threshold)
        .rare_count_threshold(args.rare_count)
        .corr_threshold(args.corr_threshold)
        .id_ratio(args.id_ratio)
        .min_group_pct(args.min_group_pct);
    if let Some(ref target) = target {
        builder = builder.target_column(target);
    }
    let config = builder.build()?;

    let df = load_dataset(&input)
        .with_context(|| format!("Could not load dataset '{}'", input.display()))?;

    let outcome = run_checks(&df, &config)?;
    info!(
        findings = outcome.findings.len(),
        critical = outcome.has_critical(),
        "lint finished"
    );

    let input_file = input.display().to_string();

    if args.json {
        let report = LintReport::new(input_file, &df, outcome);
        println!("{}", report.to_json()?);
        if let Some(ref path) = args.emit_report {
            write_report_to_file(&report, path)?;
        }
        return Ok(());
    }

    print_report(&df, &outcome);

    if let Some(ref path) = args.emit_report {
        let report = LintReport::new(input_file, &df, outcome);
        let written = write_report_to_file(&report, path)?;
        println!("\nReport written to {}", written.display());
    }

    Ok(())
}

/// Print the human-readable report.
///
/// Note: This uses `println!` intentionally for user-facing CLI output,
/// independent of the log level.
fn print_report(df: &polars::prelude::DataFrame, outcome: &dataset_lint::LintOutcome) {
    println!("\n{}", "=".repeat(80));
    println!("DATASET LINT REPORT");
    println!("{}\n", "=".repeat(80));

    println!("{}", render_dataset_summary(df));

    if let Some(notice) = render_target_status(&outcome.target) {
        println!("{}\n", notice);
    }
    if let TargetStatus::Valid { name } = &outcome.target {
        println!(
            "{}",
            render_class_distribution(name, &outcome.class_distribution)
        );
    }

    print!("{}", render_findings(&outcome.findings));
}
