//! Structural checks: missing values, duplicate rows, constant columns.

use crate::error::Result;
use crate::table;
use crate::types::{CheckKind, Finding};
use crate::utils::percent;
use polars::prelude::*;
use tracing::debug;

/// Flag columns whose missing-value percentage is strictly above `threshold`.
///
/// Every column with at least one missing value is traced at debug level
/// with its percentage, whether or not it crosses the threshold.
pub fn check_missing_values(df: &DataFrame, threshold: f64) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    let total_rows = df.height();

    for col in df.get_columns() {
        let missing = table::missing_count(col.as_materialized_series())?;
        if missing == 0 {
            continue;
        }

        let percent_missing = percent(missing, total_rows);
        debug!(
            column = %col.name(),
            missing,
            percent = percent_missing,
            "missing values"
        );

        if percent_missing > threshold {
            findings.push(
                Finding::warn(
                    CheckKind::MissingValues,
                    format!(
                        "Column '{}' has {:.2}% missing values",
                        col.name(),
                        percent_missing
                    ),
                )
                .for_column(col.name().as_str()),
            );
        }
    }

    Ok(findings)
}

/// Flag the dataset when the share of repeated rows is strictly above
/// `threshold` percent.
pub fn check_duplicates(df: &DataFrame, threshold: f64) -> Result<Vec<Finding>> {
    let duplicate_rows = table::duplicate_row_count(df)?;
    let percent_dup = percent(duplicate_rows, df.height());

    debug!(
        duplicate_rows,
        percent = percent_dup,
        "duplicate rows"
    );

    if percent_dup > threshold {
        return Ok(vec![Finding::warn(
            CheckKind::DuplicateRows,
            format!(
                "Dataset contains {} duplicate rows ({:.2}%)",
                duplicate_rows, percent_dup
            ),
        )]);
    }

    Ok(Vec::new())
}

/// Flag columns holding exactly one distinct non-null value.
///
/// Empty and all-null columns have no distinct values and are never flagged.
pub fn check_constant_columns(df: &DataFrame) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    for col in df.get_columns() {
        let unique = table::distinct_count(col.as_materialized_series())?;
        debug!(column = %col.name(), unique, "distinct values");

        if unique == 1 {
            findings.push(
                Finding::info(
                    CheckKind::ConstantColumn,
                    format!("Column '{}' is constant (only 1 unique value)", col.name()),
                )
                .for_column(col.name().as_str()),
            );
        }
    }

    Ok(findings)
}
