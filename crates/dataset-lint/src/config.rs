//! Configuration types for the dataset linter.
//!
//! Every threshold the checks accept lives here, with the builder pattern
//! for ergonomic setup. Percent thresholds are on a 0 - 100 scale; ratio
//! thresholds are on a 0.0 - 1.0 scale.

use serde::{Deserialize, Serialize};

/// Default percent of missing values above which a column is flagged.
pub const DEFAULT_MISSING_THRESHOLD: f64 = 30.0;
/// Default percent of duplicate rows above which the dataset is flagged.
pub const DEFAULT_DUPLICATE_THRESHOLD: f64 = 5.0;
/// Default majority-class percent above which the target is flagged.
pub const DEFAULT_DOMINANCE_THRESHOLD: f64 = 90.0;
/// Default sample count below which a class is flagged as rare.
pub const DEFAULT_RARE_COUNT_THRESHOLD: usize = 20;
/// Default absolute correlation above which a feature is flagged.
pub const DEFAULT_CORR_THRESHOLD: f64 = 0.9;
/// Default distinct/rows ratio above which a feature looks like an identifier.
pub const DEFAULT_ID_RATIO: f64 = 0.95;
/// Default group share (percent) below which a sensitive group is flagged.
pub const DEFAULT_MIN_GROUP_PCT: f64 = 10.0;

/// Configuration for a lint run.
///
/// Use [`LintConfig::builder()`] to create a configuration with a fluent API.
///
/// # Example
///
/// ```rust,ignore
/// use dataset_lint::config::LintConfig;
///
/// let config = LintConfig::builder()
///     .missing_threshold(20.0)
///     .target_column("label")
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LintConfig {
    /// Columns with a missing percentage strictly above this are flagged.
    /// Default: 30.0
    pub missing_threshold: f64,

    /// The dataset is flagged when its duplicate-row percentage is strictly
    /// above this.
    /// Default: 5.0
    pub duplicate_threshold: f64,

    /// The target is flagged when its majority class share is strictly above
    /// this percentage.
    /// Default: 90.0
    pub dominance_threshold: f64,

    /// Classes with strictly fewer samples than this are flagged as rare.
    /// Default: 20
    pub rare_count_threshold: usize,

    /// Features whose absolute Pearson correlation with the target is
    /// strictly above this are flagged.
    /// Default: 0.9
    pub corr_threshold: f64,

    /// Features whose distinct/rows ratio is strictly above this are
    /// considered identifier-like.
    /// Default: 0.95
    pub id_ratio: f64,

    /// Groups in sensitive columns with a share strictly below this
    /// percentage are flagged as under-represented.
    /// Default: 10.0
    pub min_group_pct: f64,

    /// Column to treat as the prediction label.
    /// If None, target-aware checks are skipped.
    /// Default: None
    pub target_column: Option<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            missing_threshold: DEFAULT_MISSING_THRESHOLD,
            duplicate_threshold: DEFAULT_DUPLICATE_THRESHOLD,
            dominance_threshold: DEFAULT_DOMINANCE_THRESHOLD,
            rare_count_threshold: DEFAULT_RARE_COUNT_THRESHOLD,
            corr_threshold: DEFAULT_CORR_THRESHOLD,
            id_ratio: DEFAULT_ID_RATIO,
            min_group_pct: DEFAULT_MIN_GROUP_PCT,
            target_column: None,
        }
    }
}

impl LintConfig {
    /// Create a new configuration builder.
    pub fn builder() -> LintConfigBuilder {
        LintConfigBuilder::default()
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        let percents = [
            ("missing_threshold", self.missing_threshold),
            ("duplicate_threshold", self.duplicate_threshold),
            ("dominance_threshold", self.dominance_threshold),
            ("min_group_pct", self.min_group_pct),
        ];
        for (field, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(ConfigValidationError::InvalidPercent {
                    field: field.to_string(),
                    value,
                });
            }
        }

        let ratios = [
            ("corr_threshold", self.corr_threshold),
            ("id_ratio", self.id_ratio),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::InvalidRatio {
                    field: field.to_string(),
                    value,
                });
            }
        }

        Ok(())
    }
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid percentage for '{field}': {value} (must be between 0 and 100)")]
    InvalidPercent { field: String, value: f64 },

    #[error("Invalid ratio for '{field}': {value} (must be between 0.0 and 1.0)")]
    InvalidRatio { field: String, value: f64 },
}

impl From<ConfigValidationError> for crate::error::LintError {
    fn from(err: ConfigValidationError) -> Self {
        crate::error::LintError::InvalidConfig(err.to_string())
    }
}

/// Builder for [`LintConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct LintConfigBuilder {
    missing_threshold: Option<f64>,
    duplicate_threshold: Option<f64>,
    dominance_threshold: Option<f64>,
    rare_count_threshold: Option<usize>,
    corr_threshold: Option<f64>,
    id_ratio: Option<f64>,
    min_group_pct: Option<f64>,
    target_column: Option<String>,
}

impl LintConfigBuilder {
    /// Set the missing-value percentage threshold (0 - 100).
    pub fn missing_threshold(mut self, threshold: f64) -> Self {
        self.missing_threshold = Some(threshold);
        self
    }

    /// Set the duplicate-row percentage threshold (0 - 100).
    pub fn duplicate_threshold(mut self, threshold: f64) -> Self {
        self.duplicate_threshold = Some(threshold);
        self
    }

    /// Set the majority-class percentage threshold (0 - 100).
    pub fn dominance_threshold(mut self, threshold: f64) -> Self {
        self.dominance_threshold = Some(threshold);
        self
    }

    /// Set the sample count below which a class is rare.
    pub fn rare_count_threshold(mut self, count: usize) -> Self {
        self.rare_count_threshold = Some(count);
        self
    }

    /// Set the absolute correlation threshold (0.0 - 1.0).
    pub fn corr_threshold(mut self, threshold: f64) -> Self {
        self.corr_threshold = Some(threshold);
        self
    }

    /// Set the distinct/rows ratio for identifier detection (0.0 - 1.0).
    pub fn id_ratio(mut self, ratio: f64) -> Self {
        self.id_ratio = Some(ratio);
        self
    }

    /// Set the minimum group share for sensitive columns (0 - 100).
    pub fn min_group_pct(mut self, pct: f64) -> Self {
        self.min_group_pct = Some(pct);
        self
    }

    /// Set the target column.
    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.target_column = Some(column.into());
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `LintConfig` or an error if validation fails.
    pub fn build(self) -> Result<LintConfig, ConfigValidationError> {
        let config = LintConfig {
            missing_threshold: self.missing_threshold.unwrap_or(DEFAULT_MISSING_THRESHOLD),
            duplicate_threshold: self
                .duplicate_threshold
                .unwrap_or(DEFAULT_DUPLICATE_THRESHOLD),
            dominance_threshold: self
                .dominance_threshold
                .unwrap_or(DEFAULT_DOMINANCE_THRESHOLD),
            rare_count_threshold: self
                .rare_count_threshold
                .unwrap_or(DEFAULT_RARE_COUNT_THRESHOLD),
            corr_threshold: self.corr_threshold.unwrap_or(DEFAULT_CORR_THRESHOLD),
            id_ratio: self.id_ratio.unwrap_or(DEFAULT_ID_RATIO),
            min_group_pct: self.min_group_pct.unwrap_or(DEFAULT_MIN_GROUP_PCT),
            target_column: self.target_column,
        };

        config.validate()?;
        Ok(config)
    }
}
