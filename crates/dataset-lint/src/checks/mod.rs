//! The check engine.
//!
//! Each check is an independent function over a [`polars::prelude::DataFrame`]
//! that returns its own `Vec<Finding>`. Checks never share state and never
//! depend on each other's output; the caller picks which ones to run and
//! concatenates the results. The only ordering rule is that the target-aware
//! checks ([`target`], [`leakage`], [`bias`]) should run only after
//! [`validate_target_column`] has accepted the target.

pub mod bias;
pub mod heuristics;
pub mod leakage;
pub mod structural;
pub mod target;

pub use bias::bias_signals;
pub use heuristics::{SMALL_DATASET_ROWS, dataset_health, trainability_checks};
pub use leakage::leakage_checks;
pub use structural::{check_constant_columns, check_duplicates, check_missing_values};
pub use target::{
    class_frequencies, class_imbalance, class_percents, extract_column, validate_target_column,
};
