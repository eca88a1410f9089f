//! Rule configuration for the built-in checkers.
//!
//! Every parameter has a compiled-in default and may be overridden
//! independently, either through the builders in [`crate::builder`] or by a
//! partial settings file (all structs deserialize with `#[serde(default)]`).
//! Configuration is resolved once at checker construction and never mutated
//! afterwards.

use crate::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// Default natural key column.
pub const DEFAULT_KEY_COLUMN: &str = "sku";
/// Default price column.
pub const DEFAULT_PRICE_COLUMN: &str = "price";
/// Default inventory column.
pub const DEFAULT_INVENTORY_COLUMN: &str = "inventory_count";
/// Prices must be strictly greater than this.
pub const DEFAULT_MIN_PRICE: f64 = 0.01;
/// Prices must be strictly lower than this.
pub const DEFAULT_MAX_PRICE: f64 = 9999.99;
/// Inventory must be at least this.
pub const DEFAULT_MIN_INVENTORY: i64 = 0;
/// Inventory below this triggers a low-stock warning.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;
/// Default identifier pattern.
pub const DEFAULT_IDENTIFIER_PATTERN: &str = r"^SKU-\d{5}$";

/// Thresholds for the price check.
///
/// The valid range is the open interval `(min_price, max_price)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRules {
    /// Column holding the row identifier
    pub key_column: String,
    /// Column holding the price
    pub price_column: String,
    /// Exclusive lower bound
    pub min_price: f64,
    /// Exclusive upper bound
    pub max_price: f64,
}

impl Default for PriceRules {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            price_column: DEFAULT_PRICE_COLUMN.to_string(),
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
        }
    }
}

impl PriceRules {
    /// Checks that the bounds leave a non-empty valid range.
    pub fn validate(&self) -> Result<()> {
        if !self.min_price.is_finite() || !self.max_price.is_finite() {
            return Err(CoreError::invalid_config(
                "min_price/max_price",
                "price bounds must be finite numbers",
            ));
        }
        if self.min_price >= self.max_price {
            return Err(CoreError::invalid_config(
                "min_price",
                format!(
                    "min_price ({}) must be lower than max_price ({})",
                    self.min_price, self.max_price
                ),
            ));
        }
        Ok(())
    }
}

/// Format pattern for the identifier check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierRules {
    /// Column holding the row identifier
    pub key_column: String,
    /// Regular expression every identifier must match
    pub identifier_pattern: String,
}

impl Default for IdentifierRules {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            identifier_pattern: DEFAULT_IDENTIFIER_PATTERN.to_string(),
        }
    }
}

/// Stock floor and low-stock threshold for the inventory check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryRules {
    /// Column holding the row identifier
    pub key_column: String,
    /// Column holding the stock count
    pub inventory_column: String,
    /// Inclusive lower bound
    pub min_inventory: i64,
    /// Counts below this (and not below `min_inventory`) are warned about
    pub low_stock_threshold: i64,
}

impl Default for InventoryRules {
    fn default() -> Self {
        Self {
            key_column: DEFAULT_KEY_COLUMN.to_string(),
            inventory_column: DEFAULT_INVENTORY_COLUMN.to_string(),
            min_inventory: DEFAULT_MIN_INVENTORY,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryRules {
    /// Checks that the low-stock threshold is not below the stock floor.
    pub fn validate(&self) -> Result<()> {
        if self.low_stock_threshold < self.min_inventory {
            return Err(CoreError::invalid_config(
                "low_stock_threshold",
                format!(
                    "low_stock_threshold ({}) must not be lower than min_inventory ({})",
                    self.low_stock_threshold, self.min_inventory
                ),
            ));
        }
        Ok(())
    }
}

/// The complete rule configuration for one validation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Price check thresholds
    pub price: PriceRules,
    /// Identifier check pattern
    pub identifier: IdentifierRules,
    /// Inventory check thresholds
    pub inventory: InventoryRules,
}

impl RuleConfig {
    /// Validates every rule group.
    ///
    /// The identifier pattern is compiled (and rejected) by the identifier
    /// checker itself.
    pub fn validate(&self) -> Result<()> {
        self.price.validate()?;
        self.inventory.validate()?;
        if self.identifier.identifier_pattern.is_empty() {
            return Err(CoreError::invalid_config(
                "identifier_pattern",
                "pattern must not be empty",
            ));
        }
        Ok(())
    }
}
