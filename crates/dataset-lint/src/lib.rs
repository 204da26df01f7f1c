//! Dataset Lint Library
//!
//! Data-quality linting for tabular machine learning datasets, built with
//! Rust and Polars.
//!
//! # Overview
//!
//! The library inspects a [`polars::prelude::DataFrame`] and reports
//! problems that would hurt a model trained on it:
//!
//! - **Structural checks**: missing values, duplicate rows, constant columns
//! - **Target checks**: class distribution, dominant and rare classes
//! - **Leakage detection**: features highly correlated with the target,
//!   identifier-like features, and the critical overlap of the two
//! - **Bias signals**: under-represented groups in sensitive attributes
//! - **Dataset heuristics**: size, width and trainability hints
//!
//! Every check is a pure function returning its own list of [`Finding`]s.
//! Nothing is printed by the checks; rendering lives in [`reporting`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dataset_lint::{LintConfig, load_dataset, run_checks};
//! use dataset_lint::reporting::render_findings;
//!
//! let df = load_dataset("data/train.csv")?;
//!
//! let config = LintConfig::builder()
//!     .target_column("Survived")
//!     .missing_threshold(20.0)
//!     .build()?;
//!
//! let outcome = run_checks(&df, &config)?;
//! println!("{}", render_findings(&outcome.findings));
//! ```
//!
//! Individual checks can also be called directly:
//!
//! ```rust,ignore
//! use dataset_lint::checks::{check_missing_values, validate_target_column, leakage_checks};
//!
//! let mut findings = check_missing_values(&df, 30.0)?;
//! if validate_target_column(&df, "label") {
//!     findings.extend(leakage_checks(&df, "label", 0.9, 0.95)?);
//! }
//! ```
//!
//! # Error Handling
//!
//! Fallible operations return [`Result<T, LintError>`](error::LintError).
//! Threshold breaches are never errors: they are findings. Only load
//! failures and unknown columns passed to a single check surface as errors.

pub mod checks;
pub mod config;
pub mod error;
pub mod lint;
pub mod loader;
pub mod reporting;
pub mod table;
pub mod types;
pub mod utils;

pub use config::{ConfigValidationError, LintConfig, LintConfigBuilder};
pub use error::{LintError, Result, ResultExt};
pub use lint::{LintOutcome, resolve_target, run_checks};
pub use loader::load_dataset;
pub use reporting::LintReport;
pub use types::{CheckKind, ClassFrequency, Finding, Severity, TargetStatus};
