//! Target leakage detection.
//!
//! Two independent passes build two sets of features: those highly
//! correlated with the target, and features that look like identifiers.
//! Features in both sets are escalated to a critical finding.

use crate::error::Result;
use crate::table;
use crate::types::{CheckKind, Finding};
use crate::utils::{has_identifier_name, is_numeric_dtype, pearson_correlation};
use polars::prelude::*;
use std::collections::BTreeSet;
use tracing::debug;

/// Flag features that may leak the target.
///
/// Only runs for a numeric target; any other target yields no findings.
/// Findings come out as correlation warnings, then identifier warnings,
/// then leakage escalations, each group in table column order.
pub fn leakage_checks(
    df: &DataFrame,
    target: &str,
    corr_threshold: f64,
    id_ratio: f64,
) -> Result<Vec<Finding>> {
    let numeric = table::numeric_columns(df);
    if !numeric.iter().any(|col| col == target) {
        debug!(target_column = target, "target is not numeric, skipping leakage checks");
        return Ok(Vec::new());
    }

    let target_values = table::numeric_values(table::series(df, target)?)?;
    let features: Vec<&Column> = df
        .get_columns()
        .iter()
        .filter(|col| col.name().as_str() != target)
        .collect();

    let mut findings = Vec::new();

    // Pass 1: correlation with the target, numeric features only
    let mut high_corr: BTreeSet<usize> = BTreeSet::new();
    for (idx, col) in features.iter().enumerate() {
        if !is_numeric_dtype(col.dtype()) {
            continue;
        }
        let values = table::numeric_values(col.as_materialized_series())?;
        let Some(corr) = pearson_correlation(&values, &target_values) else {
            debug!(feature = %col.name(), "correlation undefined, skipping");
            continue;
        };
        debug!(feature = %col.name(), corr, "correlation with target");

        if corr.abs() > corr_threshold {
            findings.push(
                Finding::warn(
                    CheckKind::HighCorrelation,
                    format!(
                        "Feature '{}' is highly correlated with target '{}' (r = {:.2})",
                        col.name(),
                        target,
                        corr
                    ),
                )
                .for_column(col.name().as_str()),
            );
            high_corr.insert(idx);
        }
    }

    // Pass 2: identifier-likeness, every feature
    let total_rows = df.height();
    let mut id_like: BTreeSet<usize> = BTreeSet::new();
    for (idx, col) in features.iter().enumerate() {
        if is_identifier_like(col.as_materialized_series(), total_rows, id_ratio)? {
            findings.push(
                Finding::warn(
                    CheckKind::IdentifierLike,
                    format!("Feature '{}' looks like an identifier", col.name()),
                )
                .for_column(col.name().as_str()),
            );
            id_like.insert(idx);
        }
    }

    // Escalation: BTreeSet over column positions keeps table order
    for idx in high_corr.intersection(&id_like) {
        let name = features[*idx].name();
        findings.push(
            Finding::critical(
                CheckKind::TargetLeakage,
                format!(
                    "Feature '{}' is both identifier-like and highly correlated with target '{}': likely target leakage",
                    name, target
                ),
            )
            .for_column(name.as_str()),
        );
    }

    Ok(findings)
}

/// A feature looks like an identifier when nearly every row has its own
/// value, or when its name says so.
fn is_identifier_like(series: &Series, total_rows: usize, id_ratio: f64) -> Result<bool> {
    if has_identifier_name(series.name()) {
        return Ok(true);
    }
    if total_rows == 0 {
        return Ok(false);
    }
    let unique_ratio = table::distinct_count(series)? as f64 / total_rows as f64;
    Ok(unique_ratio > id_ratio)
}
