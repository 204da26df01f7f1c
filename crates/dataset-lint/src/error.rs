//! Custom error types for the dataset linter.
//!
//! Threshold breaches are never errors; they are reported as findings.
//! This module covers the failures that stop a check or a whole run:
//! unreadable input, a missing column, or invalid configuration.
//!
//! Errors are serializable so they can be included in JSON output.

use serde::Serialize;
use serde::ser::SerializeStruct;
use thiserror::Error;

/// The main error type for the linter.
#[derive(Error, Debug)]
pub enum LintError {
    /// Column was not found in the dataset.
    #[error("Column '{0}' not found in dataset")]
    ColumnNotFound(String),

    /// Invalid configuration provided.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Input file does not exist.
    #[error("Input file not found: {0}")]
    FileNotFound(String),

    /// Input file exists but holds no data.
    #[error("Input file is empty: {0}")]
    EmptyFile(String),

    /// Input file could not be parsed as a table.
    #[error("Failed to parse '{path}': {reason}")]
    MalformedInput { path: String, reason: String },

    /// Input file extension is not a supported table format.
    #[error("Unsupported file format '{0}' (expected csv, tsv or parquet)")]
    UnsupportedFormat(String),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Polars error wrapper.
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LintError>,
    },
}

impl LintError {
    /// Add context to an error.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LintError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Get a stable error code for machine-readable output.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ColumnNotFound(_) => "COLUMN_NOT_FOUND",
            Self::InvalidConfig(_) => "INVALID_CONFIG",
            Self::FileNotFound(_) => "FILE_NOT_FOUND",
            Self::EmptyFile(_) => "EMPTY_FILE",
            Self::MalformedInput { .. } => "MALFORMED_INPUT",
            Self::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            Self::Io(_) => "IO_ERROR",
            Self::Polars(_) => "POLARS_ERROR",
            Self::Json(_) => "JSON_ERROR",
            Self::WithContext { source, .. } => source.error_code(),
        }
    }

    /// Check if this error happened while loading the dataset.
    ///
    /// Load failures are fatal: no check runs after one.
    pub fn is_load_failure(&self) -> bool {
        match self {
            Self::FileNotFound(_)
            | Self::EmptyFile(_)
            | Self::MalformedInput { .. }
            | Self::UnsupportedFormat(_) => true,
            Self::WithContext { source, .. } => source.is_load_failure(),
            _ => false,
        }
    }
}

/// Errors are serialized as a struct with `code` and `message` fields.
impl Serialize for LintError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("LintError", 2)?;
        state.serialize_field("code", &self.error_code())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

/// Result type alias for lint operations.
pub type Result<T> = std::result::Result<T, LintError>;

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, polars::error::PolarsError> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LintError::Polars(e).with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        assert_eq!(
            LintError::ColumnNotFound("label".to_string()).error_code(),
            "COLUMN_NOT_FOUND"
        );
        assert_eq!(
            LintError::EmptyFile("data.csv".to_string()).error_code(),
            "EMPTY_FILE"
        );
    }

    #[test]
    fn test_is_load_failure() {
        assert!(LintError::FileNotFound("missing.csv".to_string()).is_load_failure());
        assert!(
            LintError::MalformedInput {
                path: "bad.csv".to_string(),
                reason: "unterminated quote".to_string(),
            }
            .is_load_failure()
        );
        assert!(!LintError::ColumnNotFound("x".to_string()).is_load_failure());
    }

    #[test]
    fn test_error_serialization() {
        let error = LintError::ColumnNotFound("Age".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("COLUMN_NOT_FOUND"));
        assert!(json.contains("Age"));
    }

    #[test]
    fn test_with_context_preserves_code() {
        let error = LintError::EmptyFile("data.csv".to_string()).with_context("While loading");
        assert!(error.to_string().contains("While loading"));
        assert_eq!(error.error_code(), "EMPTY_FILE");
        assert!(error.is_load_failure());
    }
}
