//! Representation bias signals in sensitive categorical attributes.

use crate::error::Result;
use crate::table;
use crate::types::{CheckKind, Finding};
use crate::utils::{has_sensitive_name, percent};
use polars::prelude::*;
use tracing::debug;

/// Flag under-represented groups in sensitive categorical columns.
///
/// A column is sensitive when its name mentions gender, sex, race, age,
/// region or income. Each group whose share of the column's non-null values
/// is strictly below `min_group_pct` gets one finding.
pub fn bias_signals(df: &DataFrame, target: &str, min_group_pct: f64) -> Result<Vec<Finding>> {
    if !table::has_column(df, target) {
        debug!(target_column = target, "target not in table, skipping bias signals");
        return Ok(Vec::new());
    }

    let categorical = table::categorical_columns(df);
    if categorical.is_empty() {
        debug!("no categorical columns, skipping bias signals");
        return Ok(Vec::new());
    }

    let mut findings = Vec::new();
    for col_name in categorical
        .iter()
        .filter(|col| col.as_str() != target && has_sensitive_name(col))
    {
        let groups = table::value_frequencies(table::series(df, col_name)?)?;
        let total: usize = groups.iter().map(|(_, count)| count).sum();

        for (group, count) in &groups {
            let share = percent(*count, total);
            debug!(column = %col_name, group = %group, share, "group share");

            if share < min_group_pct {
                findings.push(
                    Finding::warn(
                        CheckKind::BiasSignal,
                        format!(
                            "Group '{}' in sensitive column '{}' is under-represented ({:.2}%)",
                            group, col_name, share
                        ),
                    )
                    .for_column(col_name.as_str()),
                );
            }
        }
    }

    Ok(findings)
}
