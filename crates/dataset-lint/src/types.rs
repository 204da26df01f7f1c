use serde::{Deserialize, Serialize};
use std::fmt;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Info,
    Warn,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    MissingValues,
    DuplicateRows,
    ConstantColumn,
    ClassDominance,
    RareClass,
    HighCorrelation,
    IdentifierLike,
    TargetLeakage,
    BiasSignal,
    DatasetHealth,
    Trainability,
}

/// A single classified observation about a dataset.
///
/// Findings are created by a check and then only read: by the caller that
/// concatenates them, and by the reporting layer that renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub check: CheckKind,
    /// Column the finding is about, if it concerns a single column.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, check: CheckKind, message: impl Into<String>) -> Self {
        Self {
            severity,
            check,
            column: None,
            message: message.into(),
        }
    }

    pub fn info(check: CheckKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, check, message)
    }

    pub fn warn(check: CheckKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Warn, check, message)
    }

    pub fn critical(check: CheckKind, message: impl Into<String>) -> Self {
        Self::new(Severity::Critical, check, message)
    }

    /// Attach the column this finding is about.
    pub fn for_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }
}

/// Renders as `[SEVERITY] message`.
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

static_assertions::assert_impl_all!(Finding: Send, Sync);

/// Count and share of one label value in the target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassFrequency {
    pub label: String,
    pub count: usize,
    /// Share of non-null labels, rounded to 2 decimals.
    pub percent: f64,
}

/// Outcome of validating the configured target column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TargetStatus {
    /// No target column was configured.
    NotRequested,
    /// Target exists; target-aware checks ran.
    Valid { name: String },
    /// Target was configured but is unusable; target-aware checks were skipped.
    Invalid { name: String, reason: String },
}

impl TargetStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Self::NotRequested => None,
            Self::Valid { name } | Self::Invalid { name, .. } => Some(name),
        }
    }
}
