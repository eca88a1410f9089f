//! Configuration for the record store.

use crate::{Result, StoreError};
use catalog_core::{DEFAULT_INVENTORY_COLUMN, DEFAULT_KEY_COLUMN, DEFAULT_PRICE_COLUMN};
use serde::{Deserialize, Serialize};

/// Default products table.
pub const DEFAULT_TABLE_NAME: &str = "products";
/// Default category column.
pub const DEFAULT_CATEGORY_COLUMN: &str = "category";
/// Default product name column.
pub const DEFAULT_NAME_COLUMN: &str = "product_name";

/// Names of the table and of the columns the analytic queries read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Table the dataset is loaded into
    pub table_name: String,
    /// Natural key column
    pub key_column: String,
    /// Column grouped by the category queries
    pub category_column: String,
    /// Product name column
    pub name_column: String,
    /// Price column
    pub price_column: String,
    /// Stock count column
    pub inventory_column: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
            name_column: DEFAULT_NAME_COLUMN.to_string(),
            price_column: DEFAULT_PRICE_COLUMN.to_string(),
            inventory_column: DEFAULT_INVENTORY_COLUMN.to_string(),
        }
    }
}

impl StoreConfig {
    /// Creates a new builder for `StoreConfig`.
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// The table name must be a plain SQL identifier; column names only need
    /// to be non-empty since they are always quoted.
    pub fn validate(&self) -> Result<()> {
        validate_identifier(&self.table_name)?;

        let columns = [
            ("key_column", &self.key_column),
            ("category_column", &self.category_column),
            ("name_column", &self.name_column),
            ("price_column", &self.price_column),
            ("inventory_column", &self.inventory_column),
        ];
        for (parameter, column) in columns {
            if column.trim().is_empty() {
                return Err(StoreError::ConfigurationError(format!(
                    "{} cannot be empty",
                    parameter
                )));
            }
        }
        Ok(())
    }
}

/// Builder for `StoreConfig`.
///
/// Unset fields keep their default.
#[derive(Debug, Clone, Default)]
pub struct StoreConfigBuilder {
    table_name: Option<String>,
    key_column: Option<String>,
    category_column: Option<String>,
    name_column: Option<String>,
    price_column: Option<String>,
    inventory_column: Option<String>,
}

impl StoreConfigBuilder {
    /// Sets the table name.
    pub fn table_name<S: Into<String>>(mut self, name: S) -> Self {
        self.table_name = Some(name.into());
        self
    }

    /// Sets the natural key column.
    pub fn key_column<S: Into<String>>(mut self, column: S) -> Self {
        self.key_column = Some(column.into());
        self
    }

    /// Sets the category column.
    pub fn category_column<S: Into<String>>(mut self, column: S) -> Self {
        self.category_column = Some(column.into());
        self
    }

    /// Sets the product name column.
    pub fn name_column<S: Into<String>>(mut self, column: S) -> Self {
        self.name_column = Some(column.into());
        self
    }

    /// Sets the price column.
    pub fn price_column<S: Into<String>>(mut self, column: S) -> Self {
        self.price_column = Some(column.into());
        self
    }

    /// Sets the stock count column.
    pub fn inventory_column<S: Into<String>>(mut self, column: S) -> Self {
        self.inventory_column = Some(column.into());
        self
    }

    /// Builds the `StoreConfig`.
    ///
    /// Returns an error if the resulting configuration is invalid.
    pub fn build(self) -> Result<StoreConfig> {
        let defaults = StoreConfig::default();
        let config = StoreConfig {
            table_name: self.table_name.unwrap_or(defaults.table_name),
            key_column: self.key_column.unwrap_or(defaults.key_column),
            category_column: self.category_column.unwrap_or(defaults.category_column),
            name_column: self.name_column.unwrap_or(defaults.name_column),
            price_column: self.price_column.unwrap_or(defaults.price_column),
            inventory_column: self.inventory_column.unwrap_or(defaults.inventory_column),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Checks that `name` is a plain SQL identifier.
pub(crate) fn validate_identifier(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidIdentifier(name.to_string()))
    }
}

/// Quotes an identifier for interpolation into SQL.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.table_name, "products");
        assert_eq!(config.key_column, "sku");
        assert_eq!(config.inventory_column, "inventory_count");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = StoreConfig::builder()
            .table_name("catalog_2024")
            .name_column("Product Name")
            .build()
            .unwrap();

        assert_eq!(config.table_name, "catalog_2024");
        assert_eq!(config.name_column, "Product Name");
        assert_eq!(config.price_column, "price");
    }

    #[test]
    fn test_invalid_table_names() {
        for name in ["", "1table", "products; DROP TABLE x", "my-table"] {
            let result = StoreConfig::builder().table_name(name).build();
            assert!(
                matches!(result, Err(StoreError::InvalidIdentifier(_))),
                "accepted {:?}",
                name
            );
        }
    }

    #[test]
    fn test_empty_column_rejected() {
        let result = StoreConfig::builder().price_column(" ").build();
        assert!(matches!(result, Err(StoreError::ConfigurationError(_))));
    }

    #[test]
    fn test_quote_identifier() {
        assert_eq!(quote_identifier("price"), "\"price\"");
        assert_eq!(quote_identifier("a\"b"), "\"a\"\"b\"");
    }
}
