//! Error types for record store operations.

use thiserror::Error;

/// Errors raised by a record store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The underlying SQLite call failed
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// A table or column name cannot be used as an SQL identifier
    #[error("Invalid identifier '{0}': expected letters, digits and underscores, not starting with a digit")]
    InvalidIdentifier(String),

    /// A dataset column collides with the store's surrogate key
    #[error("Column '{0}' is reserved by the record store")]
    ReservedColumn(String),

    /// The table has not been created yet
    #[error("Table '{0}' does not exist; load a dataset first")]
    TableNotFound(String),

    /// A query needs a column the loaded table does not have
    #[error("Table '{table}' has no column '{column}'")]
    MissingColumn { table: String, column: String },

    /// Invalid store configuration
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl StoreError {
    /// Creates a new missing column error.
    pub fn missing_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::MissingColumn {
            table: table.into(),
            column: column.into(),
        }
    }
}

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
