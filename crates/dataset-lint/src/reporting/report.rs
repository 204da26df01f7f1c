use crate::error::Result;
use crate::lint::LintOutcome;
use crate::types::{ClassFrequency, Finding, Severity, TargetStatus};
use chrono::Local;
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Serializable summary of one lint run.
///
/// Use this for both JSON output (`--json`) and file writing (`--emit-report`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    // Metadata
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Path to the input file
    pub input_file: String,

    // Dataset shape
    pub rows: usize,
    pub columns: usize,

    // Target
    /// Whether target-aware checks ran
    pub target: TargetStatus,
    /// Label distribution (empty unless the target is valid)
    pub class_distribution: Vec<ClassFrequency>,

    // Findings
    pub findings: Vec<Finding>,
    /// Number of findings per severity
    pub counts: SeverityCounts,
}

/// Findings tallied by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub info: usize,
    pub warn: usize,
    pub critical: usize,
}

impl SeverityCounts {
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings
            .iter()
            .fold(Self::default(), |mut counts, f| {
                match f.severity {
                    Severity::Info => counts.info += 1,
                    Severity::Warn => counts.warn += 1,
                    Severity::Critical => counts.critical += 1,
                }
                counts
            })
    }

    pub fn total(&self) -> usize {
        self.info + self.warn + self.critical
    }
}

impl LintReport {
    /// Build a report from a finished lint run over `df`.
    pub fn new(input_file: impl Into<String>, df: &DataFrame, outcome: LintOutcome) -> Self {
        let counts = SeverityCounts::from_findings(&outcome.findings);
        Self {
            generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            input_file: input_file.into(),
            rows: df.height(),
            columns: df.width(),
            target: outcome.target,
            class_distribution: outcome.class_distribution,
            findings: outcome.findings,
            counts,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `report` as pretty JSON to `path`, creating parent directories.
pub fn write_report_to_file(report: &LintReport, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;
    file.write_all(report.to_json()?.as_bytes())?;

    info!("Report saved: {}", path.display());

    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CheckKind;
    use pretty_assertions::assert_eq;

    fn outcome() -> LintOutcome {
        LintOutcome {
            target: TargetStatus::Valid {
                name: "label".to_string(),
            },
            class_distribution: vec![ClassFrequency {
                label: "a".to_string(),
                count: 2,
                percent: 100.0,
            }],
            findings: vec![
                Finding::info(CheckKind::DatasetHealth, "Very small dataset (2 rows)"),
                Finding::warn(CheckKind::RareClass, "Class 'a' in target 'label' has only 2 samples")
                    .for_column("label"),
            ],
        }
    }

    #[test]
    fn test_report_counts_and_shape() {
        let df = df!["x" => [1, 2], "label" => ["a", "a"]].unwrap();
        let report = LintReport::new("data.csv", &df, outcome());

        assert_eq!(report.rows, 2);
        assert_eq!(report.columns, 2);
        assert_eq!(
            report.counts,
            SeverityCounts {
                info: 1,
                warn: 1,
                critical: 0
            }
        );
        assert_eq!(report.counts.total(), report.findings.len());
    }

    #[test]
    fn test_report_json_fields() {
        let df = df!["x" => [1, 2], "label" => ["a", "a"]].unwrap();
        let report = LintReport::new("data.csv", &df, outcome());
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["input_file"], "data.csv");
        assert_eq!(value["target"]["status"], "valid");
        assert_eq!(value["findings"][1]["severity"], "WARN");
        assert_eq!(value["findings"][1]["check"], "rare_class");
        assert_eq!(value["counts"]["warn"], 1);
    }

    #[test]
    fn test_write_report_to_file() {
        let df = df!["x" => [1, 2], "label" => ["a", "a"]].unwrap();
        let report = LintReport::new("data.csv", &df, outcome());

        let dir = std::env::temp_dir().join(format!("dataset-lint-report-{}", std::process::id()));
        let path = write_report_to_file(&report, dir.join("nested/report.json")).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        let parsed: LintReport = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed.findings, report.findings);

        fs::remove_dir_all(&dir).unwrap();
    }
}
