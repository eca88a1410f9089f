//! Builder pattern for rule configuration and rows.
//!
//! Rule builders hold one optional override per parameter. `build()` resolves
//! each parameter independently: the override when one was set, the
//! compiled-in default otherwise.

use crate::{
    DEFAULT_IDENTIFIER_PATTERN, DEFAULT_INVENTORY_COLUMN, DEFAULT_KEY_COLUMN,
    DEFAULT_LOW_STOCK_THRESHOLD, DEFAULT_MAX_PRICE, DEFAULT_MIN_INVENTORY, DEFAULT_MIN_PRICE,
    DEFAULT_PRICE_COLUMN, DataRow, DataValue, IdentifierRules, InventoryRules, PriceRules,
};

/// Builder for creating `PriceRules`.
///
/// # Example
///
/// ```rust
/// use catalog_core::PriceRules;
///
/// let rules = PriceRules::builder()
///     .min_price(1.0)
///     .price_column("unit_price")
///     .build();
///
/// assert_eq!(rules.min_price, 1.0);
/// assert_eq!(rules.max_price, 9999.99);
/// ```
#[derive(Debug, Default)]
pub struct PriceRulesBuilder {
    key_column: Option<String>,
    price_column: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
}

impl PriceRules {
    /// Creates a new price rules builder.
    pub fn builder() -> PriceRulesBuilder {
        PriceRulesBuilder::default()
    }
}

impl PriceRulesBuilder {
    /// Sets the identifier column.
    pub fn key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = Some(column.into());
        self
    }

    /// Sets the price column.
    pub fn price_column(mut self, column: impl Into<String>) -> Self {
        self.price_column = Some(column.into());
        self
    }

    /// Sets the exclusive lower bound.
    pub fn min_price(mut self, min_price: f64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    /// Sets the exclusive upper bound.
    pub fn max_price(mut self, max_price: f64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Builds the rules.
    pub fn build(self) -> PriceRules {
        PriceRules {
            key_column: self
                .key_column
                .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_string()),
            price_column: self
                .price_column
                .unwrap_or_else(|| DEFAULT_PRICE_COLUMN.to_string()),
            min_price: self.min_price.unwrap_or(DEFAULT_MIN_PRICE),
            max_price: self.max_price.unwrap_or(DEFAULT_MAX_PRICE),
        }
    }
}

/// Builder for creating `IdentifierRules`.
#[derive(Debug, Default)]
pub struct IdentifierRulesBuilder {
    key_column: Option<String>,
    identifier_pattern: Option<String>,
}

impl IdentifierRules {
    /// Creates a new identifier rules builder.
    pub fn builder() -> IdentifierRulesBuilder {
        IdentifierRulesBuilder::default()
    }
}

impl IdentifierRulesBuilder {
    /// Sets the identifier column.
    pub fn key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = Some(column.into());
        self
    }

    /// Sets the identifier pattern.
    pub fn identifier_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.identifier_pattern = Some(pattern.into());
        self
    }

    /// Builds the rules.
    pub fn build(self) -> IdentifierRules {
        IdentifierRules {
            key_column: self
                .key_column
                .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_string()),
            identifier_pattern: self
                .identifier_pattern
                .unwrap_or_else(|| DEFAULT_IDENTIFIER_PATTERN.to_string()),
        }
    }
}

/// Builder for creating `InventoryRules`.
#[derive(Debug, Default)]
pub struct InventoryRulesBuilder {
    key_column: Option<String>,
    inventory_column: Option<String>,
    min_inventory: Option<i64>,
    low_stock_threshold: Option<i64>,
}

impl InventoryRules {
    /// Creates a new inventory rules builder.
    pub fn builder() -> InventoryRulesBuilder {
        InventoryRulesBuilder::default()
    }
}

impl InventoryRulesBuilder {
    /// Sets the identifier column.
    pub fn key_column(mut self, column: impl Into<String>) -> Self {
        self.key_column = Some(column.into());
        self
    }

    /// Sets the inventory column.
    pub fn inventory_column(mut self, column: impl Into<String>) -> Self {
        self.inventory_column = Some(column.into());
        self
    }

    /// Sets the inclusive stock floor.
    pub fn min_inventory(mut self, min_inventory: i64) -> Self {
        self.min_inventory = Some(min_inventory);
        self
    }

    /// Sets the low-stock threshold.
    pub fn low_stock_threshold(mut self, threshold: i64) -> Self {
        self.low_stock_threshold = Some(threshold);
        self
    }

    /// Builds the rules.
    pub fn build(self) -> InventoryRules {
        InventoryRules {
            key_column: self
                .key_column
                .unwrap_or_else(|| DEFAULT_KEY_COLUMN.to_string()),
            inventory_column: self
                .inventory_column
                .unwrap_or_else(|| DEFAULT_INVENTORY_COLUMN.to_string()),
            min_inventory: self.min_inventory.unwrap_or(DEFAULT_MIN_INVENTORY),
            low_stock_threshold: self
                .low_stock_threshold
                .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD),
        }
    }
}

/// Builder for creating a `DataRow`.
///
/// # Example
///
/// ```rust
/// use catalog_core::{DataValue, RowBuilder};
///
/// let row = RowBuilder::new()
///     .value("sku", "SKU-00001")
///     .value("price", 12.5)
///     .null("category")
///     .build();
///
/// assert_eq!(row.get("category"), Some(&DataValue::Null));
/// ```
#[derive(Debug, Default)]
pub struct RowBuilder {
    row: DataRow,
}

impl RowBuilder {
    /// Creates a new, empty row builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a column value.
    pub fn value(mut self, column: impl Into<String>, value: impl Into<DataValue>) -> Self {
        self.row.insert(column.into(), value.into());
        self
    }

    /// Sets a column to `Null`.
    pub fn null(mut self, column: impl Into<String>) -> Self {
        self.row.insert(column.into(), DataValue::Null);
        self
    }

    /// Builds the row.
    pub fn build(self) -> DataRow {
        self.row
    }
}
