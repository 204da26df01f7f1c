//! Plain-text rendering of a lint run.
//!
//! Each function returns a `String` so callers decide where it goes.

use crate::types::{ClassFrequency, Finding, TargetStatus};
use crate::utils::{DtypeCategory, get_dtype_category};
use polars::prelude::*;
use std::fmt::Write;

const RULE_WIDTH: usize = 40;

fn section(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

/// Row count, column count and one `name ---> dtype` line per column.
pub fn render_dataset_summary(df: &DataFrame) -> String {
    let count = |category: DtypeCategory| {
        df.get_columns()
            .iter()
            .filter(|col| get_dtype_category(col.dtype()) == category)
            .count()
    };

    let mut out = String::new();
    section(&mut out, "Dataset Summary");
    let _ = writeln!(out, "  Rows: {}", df.height());
    let _ = writeln!(
        out,
        "  Columns: {} ({} numeric, {} categorical)",
        df.width(),
        count(DtypeCategory::Numeric),
        count(DtypeCategory::Categorical)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Column Types");
    for col in df.get_columns() {
        let _ = writeln!(out, "  {} ---> {}", col.name(), col.dtype());
    }
    out
}

/// Label counts and percentages of the target, most frequent first.
pub fn render_class_distribution(target: &str, freqs: &[ClassFrequency]) -> String {
    let mut out = String::new();
    section(&mut out, &format!("Class Distribution ({})", target));
    if freqs.is_empty() {
        let _ = writeln!(out, "  No labelled rows");
        return out;
    }
    for freq in freqs {
        let _ = writeln!(
            out,
            "  {:<20} {:>8} {:>8.2}%",
            freq.label, freq.count, freq.percent
        );
    }
    out
}

/// Notice for a target that was requested but could not be used.
///
/// Returns `None` when there is nothing to say.
pub fn render_target_status(status: &TargetStatus) -> Option<String> {
    match status {
        TargetStatus::Invalid { reason, .. } => Some(format!(
            "Target not usable: {}. Target-aware checks skipped.",
            reason
        )),
        TargetStatus::NotRequested | TargetStatus::Valid { .. } => None,
    }
}

/// The `Lint Warnings` section: one line per finding, or
/// `No major issues detected` when there are none.
pub fn render_findings(findings: &[Finding]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Lint Warnings");
    let _ = writeln!(out, "-------------");
    if findings.is_empty() {
        let _ = writeln!(out, "No major issues detected");
        return out;
    }

    for finding in findings {
        let _ = writeln!(out, "{}", finding);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_findings_empty() {
        assert_eq!(
            render_findings(&[]),
            "Lint Warnings\n\
             -------------\n\
             No major issues detected\n"
        );
    }

    #[test]
    fn test_render_findings_lines() {
        let findings = vec![
            Finding::warn(CheckKind::MissingValues, "Column 'a' has 50.00% missing values"),
            Finding::info(CheckKind::DatasetHealth, "Very small dataset (4 rows)"),
        ];
        assert_eq!(
            render_findings(&findings),
            "Lint Warnings\n\
             -------------\n\
             [WARN] Column 'a' has 50.00% missing values\n\
             [INFO] Very small dataset (4 rows)\n"
        );
    }

    #[test]
    fn test_render_dataset_summary() {
        let df = df!["age" => [1i64, 2], "name" => ["a", "b"]].unwrap();
        let text = render_dataset_summary(&df);

        assert!(text.contains("Rows: 2"));
        assert!(text.contains("Columns: 2 (1 numeric, 1 categorical)"));
        assert!(text.contains("age ---> i64"));
        assert!(text.contains("name ---> str"));
    }

    #[test]
    fn test_render_class_distribution() {
        let freqs = vec![
            ClassFrequency { label: "yes".to_string(), count: 3, percent: 75.0 },
            ClassFrequency { label: "no".to_string(), count: 1, percent: 25.0 },
        ];
        let text = render_class_distribution("label", &freqs);

        assert!(text.starts_with("Class Distribution (label)"));
        assert!(text.contains("75.00%"));
        assert!(text.find("yes").unwrap() < text.find("no").unwrap());
    }

    #[test]
    fn test_render_target_status() {
        assert_eq!(render_target_status(&TargetStatus::NotRequested), None);
        let invalid = TargetStatus::Invalid {
            name: "y".to_string(),
            reason: "column 'y' not found in dataset".to_string(),
        };
        assert!(render_target_status(&invalid).unwrap().contains("not found"));
    }
}
