//! Dataset-level heuristics: overall health and trainability.

use crate::error::Result;
use crate::table;
use crate::types::{CheckKind, Finding};
use polars::prelude::*;

/// Row count below which a dataset is considered very small.
pub const SMALL_DATASET_ROWS: usize = 100;

/// Flag very small datasets and tables with more columns than rows.
pub fn dataset_health(df: &DataFrame) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    let (rows, cols) = df.shape();

    if rows < SMALL_DATASET_ROWS {
        findings.push(Finding::info(
            CheckKind::DatasetHealth,
            format!("Very small dataset ({} rows)", rows),
        ));
    }

    if cols > rows {
        findings.push(Finding::warn(
            CheckKind::DatasetHealth,
            format!(
                "More features than samples ({} columns, {} rows)",
                cols, rows
            ),
        ));
    }

    Ok(findings)
}

/// Flag properties that stop a model from being fit on the table as-is.
pub fn trainability_checks(df: &DataFrame) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();

    if table::total_missing(df)? > 0 {
        findings.push(Finding::info(
            CheckKind::Trainability,
            "Dataset still contains missing values; they must be handled before training",
        ));
    }

    if table::numeric_columns(df).is_empty() {
        findings.push(Finding::warn(
            CheckKind::Trainability,
            "No numeric features available for ML models",
        ));
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_small_dataset_info() {
        let df = df!["a" => [1, 2, 3]].unwrap();
        let findings = dataset_health(&df).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[0].message, "Very small dataset (3 rows)");
    }

    #[test]
    fn test_more_columns_than_rows() {
        let df = df!["a" => [1], "b" => [2], "c" => [3]].unwrap();
        let findings = dataset_health(&df).unwrap();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[1].severity, Severity::Warn);
        assert_eq!(
            findings[1].message,
            "More features than samples (3 columns, 1 rows)"
        );
    }

    #[test]
    fn test_healthy_dataset() {
        let values: Vec<i64> = (0..SMALL_DATASET_ROWS as i64).collect();
        let df = df!["a" => values].unwrap();
        assert!(dataset_health(&df).unwrap().is_empty());
    }

    #[test]
    fn test_trainability_both_fire() {
        let df = df!["text" => [Some("a"), None, Some("c")]].unwrap();
        let findings = trainability_checks(&df).unwrap();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].severity, Severity::Info);
        assert_eq!(findings[1].severity, Severity::Warn);
        assert_eq!(
            findings[1].message,
            "No numeric features available for ML models"
        );
    }

    #[test]
    fn test_trainability_clean_numeric_table() {
        let df = df!["x" => [1.0, 2.0], "y" => ["a", "b"]].unwrap();
        assert!(trainability_checks(&df).unwrap().is_empty());
    }

    #[test]
    fn test_trainability_nan_counts_as_missing() {
        let df = df!["x" => [1.0, f64::NAN]].unwrap();
        let findings = trainability_checks(&df).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].check, CheckKind::Trainability);
    }
}
