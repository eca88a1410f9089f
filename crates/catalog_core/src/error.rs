//! Error types for catalog core operations.
//!
//! Data-quality problems are never errors: they are reported as
//! [`IssueRecord`](crate::IssueRecord)s. The errors here cover malformed
//! configuration only.

use thiserror::Error;

/// Result type for catalog core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for catalog core operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A rule parameter has a value the checkers cannot work with
    #[error("Invalid rule configuration for '{parameter}': {message}")]
    InvalidConfig {
        /// Name of the offending parameter
        parameter: String,
        /// Why the value was rejected
        message: String,
    },
}

impl CoreError {
    /// Creates a new invalid configuration error.
    pub fn invalid_config(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            message: message.into(),
        }
    }
}
