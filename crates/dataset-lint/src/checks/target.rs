//! Target-aware checks: target validation, class distribution and
//! class imbalance.

use crate::error::{LintError, Result};
use crate::table;
use crate::types::{CheckKind, ClassFrequency, Finding};
use crate::utils::{percent, round2};
use polars::prelude::*;
use tracing::debug;

/// Check that `name` designates a usable target column.
///
/// Returns false for blank names and for names (after trimming) that are
/// not columns of the table. Never fails: a bad target only disables the
/// target-aware checks.
pub fn validate_target_column(df: &DataFrame, name: &str) -> bool {
    let name = name.trim();
    if name.is_empty() {
        debug!("target column name is blank");
        return false;
    }
    if !table::has_column(df, name) {
        debug!(target_column = name, "target column not found");
        return false;
    }
    true
}

/// Split the table into features (every column except `name`) and the
/// target values. The source table is not modified.
pub fn extract_column(df: &DataFrame, name: &str) -> Result<(DataFrame, Series)> {
    let target = table::series(df, name)?.clone();
    let features = df
        .drop(name)
        .map_err(|_| LintError::ColumnNotFound(name.to_string()))?;
    Ok((features, target))
}

/// Count of each label in the target column, most frequent first.
///
/// Percentages are relative to the non-null labels and rounded to 2 decimals.
pub fn class_frequencies(df: &DataFrame, name: &str) -> Result<Vec<ClassFrequency>> {
    let counts = table::value_frequencies(table::series(df, name)?)?;
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    Ok(counts
        .into_iter()
        .map(|(label, count)| ClassFrequency {
            label,
            count,
            percent: round2(percent(count, total)),
        })
        .collect())
}

/// Label and rounded percentage pairs, most frequent first.
pub fn class_percents(df: &DataFrame, name: &str) -> Result<Vec<(String, f64)>> {
    Ok(class_frequencies(df, name)?
        .into_iter()
        .map(|freq| (freq.label, freq.percent))
        .collect())
}

/// Flag a dominant majority class and every rare class.
///
/// The two rules are independent and can both fire in one run.
pub fn class_imbalance(
    df: &DataFrame,
    name: &str,
    dominance_threshold: f64,
    rare_count_threshold: usize,
) -> Result<Vec<Finding>> {
    let mut findings = Vec::new();
    let counts = table::value_frequencies(table::series(df, name)?)?;
    let total: usize = counts.iter().map(|(_, count)| count).sum();

    if let Some((label, count)) = counts.first() {
        let majority_pct = percent(*count, total);
        if majority_pct > dominance_threshold {
            findings.push(
                Finding::warn(
                    CheckKind::ClassDominance,
                    format!(
                        "Target '{}' is dominated by class '{}' ({:.2}%)",
                        name, label, majority_pct
                    ),
                )
                .for_column(name),
            );
        }
    }

    for (label, count) in &counts {
        if *count < rare_count_threshold {
            findings.push(
                Finding::warn(
                    CheckKind::RareClass,
                    format!(
                        "Class '{}' in target '{}' has only {} samples",
                        label, name, count
                    ),
                )
                .for_column(name),
            );
        }
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labels(majority: usize, minority: usize) -> DataFrame {
        let mut values = vec!["A"; majority];
        values.extend(vec!["B"; minority]);
        let feature: Vec<i64> = (0..values.len() as i64).collect();
        df!["feature" => feature, "label" => values].unwrap()
    }

    // ==================== validate_target_column tests ====================

    #[test]
    fn test_validate_target_blank() {
        let df = labels(3, 1);
        assert!(!validate_target_column(&df, ""));
        assert!(!validate_target_column(&df, "   "));
    }

    #[test]
    fn test_validate_target_missing() {
        let df = labels(3, 1);
        assert!(!validate_target_column(&df, "species"));
    }

    #[test]
    fn test_validate_target_trims_name() {
        let df = labels(3, 1);
        assert!(validate_target_column(&df, "label"));
        assert!(validate_target_column(&df, "  label "));
    }

    // ==================== extract_column tests ====================

    #[test]
    fn test_extract_column_projection() {
        let df = labels(3, 1);
        let (features, target) = extract_column(&df, "label").unwrap();

        assert_eq!(table::column_names(&features), vec!["feature"]);
        assert_eq!(target.len(), 4);
        // Source table untouched
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_extract_column_unknown() {
        let df = labels(3, 1);
        assert!(matches!(
            extract_column(&df, "nope"),
            Err(LintError::ColumnNotFound(_))
        ));
    }

    // ==================== class distribution tests ====================

    #[test]
    fn test_class_frequencies() {
        let df = df!["label" => ["x", "y", "x", "z", "x", "y"]].unwrap();
        let freqs = class_frequencies(&df, "label").unwrap();

        assert_eq!(
            freqs,
            vec![
                ClassFrequency { label: "x".to_string(), count: 3, percent: 50.0 },
                ClassFrequency { label: "y".to_string(), count: 2, percent: 33.33 },
                ClassFrequency { label: "z".to_string(), count: 1, percent: 16.67 },
            ]
        );
    }

    #[test]
    fn test_class_percents_ignore_nulls() {
        let df = df!["label" => [Some("x"), None, Some("y"), Some("x")]].unwrap();
        let pcts = class_percents(&df, "label").unwrap();
        assert_eq!(
            pcts,
            vec![("x".to_string(), 66.67), ("y".to_string(), 33.33)]
        );
    }

    #[test]
    fn test_class_frequencies_skip_nan_labels() {
        let df = df!["label" => [1.0, f64::NAN, 1.0]].unwrap();
        assert_eq!(
            class_frequencies(&df, "label").unwrap(),
            vec![ClassFrequency { label: "1.0".to_string(), count: 2, percent: 100.0 }]
        );
    }

    // ==================== class_imbalance tests ====================

    #[test]
    fn test_class_imbalance_dominant_and_rare() {
        let df = labels(95, 5);
        let findings = class_imbalance(&df, "label", 90.0, 20).unwrap();

        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].check, CheckKind::ClassDominance);
        assert_eq!(
            findings[0].message,
            "Target 'label' is dominated by class 'A' (95.00%)"
        );
        assert_eq!(findings[1].check, CheckKind::RareClass);
        assert_eq!(
            findings[1].message,
            "Class 'B' in target 'label' has only 5 samples"
        );
    }

    #[test]
    fn test_class_imbalance_rare_threshold_at_count() {
        // count == threshold is not rare
        let df = labels(95, 5);
        let findings = class_imbalance(&df, "label", 90.0, 5).unwrap();

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].check, CheckKind::ClassDominance);
    }

    #[test]
    fn test_class_imbalance_balanced() {
        let df = labels(50, 50);
        assert!(class_imbalance(&df, "label", 90.0, 20).unwrap().is_empty());
    }

    #[test]
    fn test_class_imbalance_dominance_is_strict() {
        let df = labels(90, 10);
        let findings = class_imbalance(&df, "label", 90.0, 0).unwrap();
        assert!(findings.is_empty());
    }

    #[test]
    fn test_class_imbalance_all_null_target() {
        let df = df!["label" => [None::<&str>, None]].unwrap();
        assert!(class_imbalance(&df, "label", 90.0, 20).unwrap().is_empty());
    }
}
