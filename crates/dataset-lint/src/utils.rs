//! Shared utilities for the checks.
//!
//! This module contains the dtype classification, column-name keyword
//! matching and small numeric helpers used across multiple checks.

use once_cell::sync::Lazy;
use polars::prelude::*;
use regex::Regex;

// =============================================================================
// Data Type Utilities
// =============================================================================

/// Category of a data type for linting purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DtypeCategory {
    /// Integer or floating point numbers
    Numeric,
    /// String or categorical text
    Categorical,
    /// Boolean type
    Boolean,
    /// Date or datetime types
    Datetime,
    /// Other/unknown types
    Other,
}

/// Check if a DataType is numeric (integer or float).
#[inline]
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Check if a DataType holds text labels.
#[inline]
pub fn is_categorical_dtype(dtype: &DataType) -> bool {
    matches!(dtype, DataType::String | DataType::Categorical(_, _))
}

/// Get the category of a DataType.
pub fn get_dtype_category(dtype: &DataType) -> DtypeCategory {
    if is_numeric_dtype(dtype) {
        DtypeCategory::Numeric
    } else if is_categorical_dtype(dtype) {
        DtypeCategory::Categorical
    } else if matches!(dtype, DataType::Boolean) {
        DtypeCategory::Boolean
    } else if matches!(
        dtype,
        DataType::Datetime(_, _) | DataType::Date | DataType::Time
    ) {
        DtypeCategory::Datetime
    } else {
        DtypeCategory::Other
    }
}

// =============================================================================
// Column Name Keywords
// =============================================================================

// Matched against lowercased column names.
static IDENTIFIER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"id|uuid|index").expect("Invalid regex: identifier name"));

static SENSITIVE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"gender|sex|race|age|region|income").expect("Invalid regex: sensitive name")
});

/// Check if a column name suggests an identifier (`id`, `uuid`, `index`).
pub fn has_identifier_name(col_name: &str) -> bool {
    IDENTIFIER_NAME.is_match(&col_name.to_lowercase())
}

/// Check if a column name suggests a sensitive attribute.
pub fn has_sensitive_name(col_name: &str) -> bool {
    SENSITIVE_NAME.is_match(&col_name.to_lowercase())
}

// =============================================================================
// Numeric Utilities
// =============================================================================

/// Percentage of `part` in `total`, or 0 when `total` is 0.
#[inline]
pub fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Round to 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pearson correlation over the positions where both values are present and
/// finite.
///
/// Returns `None` when the correlation is undefined: fewer than two complete
/// pairs, or zero variance on either side.
pub fn pearson_correlation(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let (x, y): (Vec<f64>, Vec<f64>) = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .unzip();

    if x.len() < 2 {
        return None;
    }

    let x = Float64Chunked::from_vec(PlSmallStr::from_static("x"), x);
    let y = Float64Chunked::from_vec(PlSmallStr::from_static("y"), y);

    // NaN when either side has zero variance
    polars::prelude::cov::pearson_corr(&x, &y).filter(|r| r.is_finite())
}

// =============================================================================
// Tests
// =============================================================================
