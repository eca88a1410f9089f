//! Error types for validation operations.
//!
//! These are the structural failures of a run: a checker that cannot do its
//! job at all. Row-level data-quality problems are `IssueRecord`s and never
//! appear here.

use catalog_core::CoreError;
use thiserror::Error;

/// Errors that abort a validation run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A column the checker needs is absent from the dataset schema
    #[error("Checker '{checker}' requires column '{column}', which is missing from the dataset schema")]
    MissingColumn { checker: String, column: String },

    /// The checker needs row data but got none
    #[error("Checker '{checker}' requires row data but the dataset has no rows")]
    EmptyDataset { checker: String },

    /// Invalid regex pattern
    #[error("Checker '{checker}' has an invalid pattern '{pattern}': {error}")]
    InvalidPattern {
        checker: String,
        pattern: String,
        error: String,
    },

    /// Rule configuration rejected at construction
    #[error("Checker '{checker}' has an invalid configuration: {source}")]
    InvalidConfig {
        checker: String,
        #[source]
        source: CoreError,
    },

    /// A custom checker failed for its own reasons
    #[error("Checker '{checker}' failed: {message}")]
    CheckerFailed { checker: String, message: String },

    /// Generic validation error
    #[error("Validation error: {0}")]
    General(String),
}

impl ValidationError {
    /// Creates a new missing column error.
    pub fn missing_column(checker: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            checker: checker.into(),
            column: column.into(),
        }
    }

    /// Creates a new empty dataset error.
    pub fn empty_dataset(checker: impl Into<String>) -> Self {
        Self::EmptyDataset {
            checker: checker.into(),
        }
    }

    /// Creates a new invalid pattern error.
    pub fn invalid_pattern(
        checker: impl Into<String>,
        pattern: impl Into<String>,
        error: impl ToString,
    ) -> Self {
        Self::InvalidPattern {
            checker: checker.into(),
            pattern: pattern.into(),
            error: error.to_string(),
        }
    }

    /// Creates a new invalid configuration error.
    pub fn invalid_config(checker: impl Into<String>, source: CoreError) -> Self {
        Self::InvalidConfig {
            checker: checker.into(),
            source,
        }
    }

    /// Creates a new checker failure.
    pub fn checker_failed(checker: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CheckerFailed {
            checker: checker.into(),
            message: message.into(),
        }
    }

    /// Name of the checker this error belongs to, if known.
    pub fn checker(&self) -> Option<&str> {
        match self {
            Self::MissingColumn { checker, .. }
            | Self::EmptyDataset { checker }
            | Self::InvalidPattern { checker, .. }
            | Self::InvalidConfig { checker, .. }
            | Self::CheckerFailed { checker, .. } => Some(checker),
            Self::General(_) => None,
        }
    }
}
