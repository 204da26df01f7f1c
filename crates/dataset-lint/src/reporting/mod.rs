//! Report rendering.
//!
//! Checks only return findings; this module turns a lint run into output.
//!
//! - [`console`] renders the plain-text sections printed by the CLI
//! - [`LintReport`] is the serializable form used by `--json` and
//!   `--emit-report`
//!
//! # Example
//!
//! ```rust,ignore
//! use dataset_lint::reporting::{LintReport, render_findings};
//!
//! let outcome = run_checks(&df, &config)?;
//! println!("{}", render_findings(&outcome.findings));
//!
//! let report = LintReport::new("data/train.csv", &df, outcome);
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! ```

pub mod console;
mod report;

pub use console::{
    render_class_distribution, render_dataset_summary, render_findings, render_target_status,
};
pub use report::{LintReport, SeverityCounts, write_report_to_file};
