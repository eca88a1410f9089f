//! Error types for ingestion and settings loading.

use catalog_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading data or settings.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// File I/O error
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV parsing failed, including rows with the wrong number of fields
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// The CSV header names the same column twice
    #[error("Duplicate column '{0}' in CSV header")]
    DuplicateColumn(String),

    /// YAML parsing or deserialization failed
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing or deserialization failed
    #[error("Failed to parse TOML: {0}")]
    Toml(String),

    /// Unsupported file format
    #[error("Unsupported settings format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,

    /// An environment override could not be parsed
    #[error("Invalid value '{value}' for {variable}: {message}")]
    InvalidOverride {
        variable: String,
        value: String,
        message: String,
    },

    /// The resolved settings are inconsistent
    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] CoreError),
}

impl LoaderError {
    /// Creates an I/O error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid override error.
    pub fn invalid_override(
        variable: impl Into<String>,
        value: impl Into<String>,
        message: impl ToString,
    ) -> Self {
        Self::InvalidOverride {
            variable: variable.into(),
            value: value.into(),
            message: message.to_string(),
        }
    }
}

/// Result type alias for loader operations.
pub type Result<T> = std::result::Result<T, LoaderError>;
