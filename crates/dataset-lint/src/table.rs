//! Table access helpers over a polars [`DataFrame`].
//!
//! Checks read the table only through these functions: column enumeration in
//! stable order, missing and distinct counts, dtype classification, full-row
//! duplicate counting and label frequencies.

use crate::error::{LintError, Result};
use crate::utils::{is_categorical_dtype, is_numeric_dtype};
use polars::prelude::*;
use std::collections::HashMap;

/// Column names in table order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect()
}

/// Check whether the table has a column with exactly this name.
pub fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names()
        .into_iter()
        .any(|col| col.as_str() == name)
}

/// Look up a column as a Series.
pub fn series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| LintError::ColumnNotFound(name.to_string()))
}

/// Names of the integer and float columns, in table order.
pub fn numeric_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_numeric_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Names of the string and categorical columns, in table order.
pub fn categorical_columns(df: &DataFrame) -> Vec<String> {
    df.get_columns()
        .iter()
        .filter(|col| is_categorical_dtype(col.dtype()))
        .map(|col| col.name().to_string())
        .collect()
}

/// Number of missing values in a column.
///
/// Nulls are missing; so is `NaN` in float columns.
pub fn missing_count(series: &Series) -> Result<usize> {
    let nulls = series.null_count();
    let nans = match series.dtype() {
        DataType::Float32 | DataType::Float64 => {
            let floats = series.cast(&DataType::Float64)?;
            floats
                .f64()?
                .into_iter()
                .filter(|v| v.is_some_and(f64::is_nan))
                .count()
        }
        _ => 0,
    };
    Ok(nulls + nans)
}

/// Total number of missing cells across the whole table.
pub fn total_missing(df: &DataFrame) -> Result<usize> {
    let mut total = 0;
    for col in df.get_columns() {
        total += missing_count(col.as_materialized_series())?;
    }
    Ok(total)
}

/// The column without its missing values (nulls, and `NaN` for floats).
pub fn present_values(series: &Series) -> Result<Series> {
    let non_null = series.drop_nulls();
    match non_null.dtype() {
        DataType::Float32 | DataType::Float64 => {
            let mask = non_null.is_not_nan()?;
            Ok(non_null.filter(&mask)?)
        }
        _ => Ok(non_null),
    }
}

/// Number of distinct non-missing values in a column.
pub fn distinct_count(series: &Series) -> Result<usize> {
    let present = present_values(series)?;
    if present.is_empty() {
        return Ok(0);
    }
    Ok(present.n_unique()?)
}

/// Number of rows that exactly repeat an earlier row (nulls compare equal).
pub fn duplicate_row_count(df: &DataFrame) -> Result<usize> {
    if df.height() == 0 || df.width() == 0 {
        return Ok(0);
    }
    let unique_rows = df
        .unique::<&str, &str>(None, UniqueKeepStrategy::First, None)?
        .height();
    Ok(df.height() - unique_rows)
}

/// Column values as `f64`, keeping nulls in place.
pub fn numeric_values(series: &Series) -> Result<Vec<Option<f64>>> {
    let floats = series.cast(&DataType::Float64)?;
    Ok(floats.f64()?.into_iter().collect())
}

/// Count of each distinct non-missing value, rendered as text.
///
/// Ordered by descending count; equal counts keep first-appearance order.
pub fn value_frequencies(series: &Series) -> Result<Vec<(String, usize)>> {
    let labels = present_values(series)?.cast(&DataType::String)?;

    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for label in labels.str()?.into_iter().flatten() {
        match positions.get(label) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(label.to_string(), counts.len());
                counts.push((label.to_string(), 1));
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts)
}
