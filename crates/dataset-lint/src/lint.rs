//! Sequencing of the checks for a full lint run.
//!
//! The checks themselves are independent; this module is one caller of
//! them, used by the CLI. It runs the structural checks, gates the
//! target-aware checks on [`validate_target_column`], then runs the
//! dataset-level heuristics, and concatenates every check's findings.

use crate::checks::{
    bias_signals, check_constant_columns, check_duplicates, check_missing_values,
    class_frequencies, class_imbalance, dataset_health, leakage_checks, trainability_checks,
    validate_target_column,
};
use crate::config::LintConfig;
use crate::error::{Result, ResultExt};
use crate::types::{ClassFrequency, Finding, Severity, TargetStatus};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Everything a lint run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintOutcome {
    /// Whether target-aware checks ran, and why not if they didn't.
    pub target: TargetStatus,
    /// Label distribution of the target (empty unless the target is valid).
    pub class_distribution: Vec<ClassFrequency>,
    /// Findings of every check, in run order.
    pub findings: Vec<Finding>,
}

impl LintOutcome {
    /// Number of findings with the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.findings
            .iter()
            .filter(|f| f.severity == severity)
            .count()
    }

    /// True when at least one finding is critical.
    pub fn has_critical(&self) -> bool {
        self.count(Severity::Critical) > 0
    }
}

/// Run every check over `df` with the thresholds in `config`.
pub fn run_checks(df: &DataFrame, config: &LintConfig) -> Result<LintOutcome> {
    config.validate()?;

    let mut findings = Vec::new();

    findings.extend(
        check_missing_values(df, config.missing_threshold).context("Missing value check")?,
    );
    findings.extend(check_duplicates(df, config.duplicate_threshold).context("Duplicate check")?);
    findings.extend(check_constant_columns(df).context("Constant column check")?);

    let target = resolve_target(df, config.target_column.as_deref());
    let mut class_distribution = Vec::new();

    if let TargetStatus::Valid { name } = &target {
        info!(target_column = %name, "running target-aware checks");

        class_distribution = class_frequencies(df, name).context("Class distribution")?;
        findings.extend(
            class_imbalance(
                df,
                name,
                config.dominance_threshold,
                config.rare_count_threshold,
            )
            .context("Class imbalance check")?,
        );
        findings.extend(
            leakage_checks(df, name, config.corr_threshold, config.id_ratio)
                .context("Leakage check")?,
        );
        findings.extend(bias_signals(df, name, config.min_group_pct).context("Bias check")?);
    }

    findings.extend(dataset_health(df).context("Dataset health check")?);
    findings.extend(trainability_checks(df).context("Trainability check")?);

    info!(findings = findings.len(), "lint run complete");

    Ok(LintOutcome {
        target,
        class_distribution,
        findings,
    })
}

/// Validate the configured target and explain why it is unusable.
pub fn resolve_target(df: &DataFrame, target: Option<&str>) -> TargetStatus {
    let Some(raw) = target else {
        return TargetStatus::NotRequested;
    };

    let name = raw.trim();
    if validate_target_column(df, name) {
        return TargetStatus::Valid {
            name: name.to_string(),
        };
    }

    let reason = if name.is_empty() {
        "target column name is blank".to_string()
    } else {
        format!("column '{}' not found in dataset", name)
    };
    warn!(target_column = name, %reason, "skipping target-aware checks");

    TargetStatus::Invalid {
        name: name.to_string(),
        reason,
    }
}
