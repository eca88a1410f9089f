//! The issue record emitted by every rule checker.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Issue type names produced by the built-in checkers.
///
/// Issue types are open-ended: custom checkers may emit any other string.
pub mod issue_types {
    /// Price cell is missing or not a finite number
    pub const INVALID_PRICE_FORMAT: &str = "invalid_price_format";
    /// Price at or below the configured minimum
    pub const PRICE_TOO_LOW: &str = "price_too_low";
    /// Price at or above the configured maximum
    pub const PRICE_TOO_HIGH: &str = "price_too_high";
    /// Identifier does not match the configured pattern
    pub const INVALID_SKU_FORMAT: &str = "invalid_sku_format";
    /// Identifier appears more than once in the catalog
    pub const DUPLICATE_SKU: &str = "duplicate_sku";
    /// Inventory cell is missing or not an integer
    pub const INVALID_INVENTORY_FORMAT: &str = "invalid_inventory_format";
    /// Inventory below the configured minimum
    pub const NEGATIVE_INVENTORY: &str = "negative_inventory";
    /// Inventory below the low-stock threshold
    pub const LOW_STOCK_WARNING: &str = "low_stock_warning";
}

/// A single reported data-quality problem tied to one row and one issue type.
///
/// `identifier` is the raw value of the row's key column, even when that
/// value is itself malformed. Records are immutable once created.
///
/// # Example
///
/// ```rust
/// use catalog_core::{IssueRecord, issue_types};
///
/// let issue = IssueRecord::new(
///     "SKU-00042",
///     issue_types::PRICE_TOO_LOW,
///     "Price 0 must be > 0.01",
/// );
/// assert_eq!(issue.identifier(), "SKU-00042");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueRecord {
    identifier: String,
    issue_type: String,
    issue_description: String,
}

impl IssueRecord {
    /// Creates a new issue record.
    pub fn new(
        identifier: impl Into<String>,
        issue_type: impl Into<String>,
        issue_description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            issue_type: issue_type.into(),
            issue_description: issue_description.into(),
        }
    }

    /// Raw key value of the offending row.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Issue type name, e.g. `duplicate_sku`.
    pub fn issue_type(&self) -> &str {
        &self.issue_type
    }

    /// Human-readable description.
    pub fn issue_description(&self) -> &str {
        &self.issue_description
    }
}

impl fmt::Display for IssueRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.issue_type, self.identifier, self.issue_description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_serializes_with_contract_field_names() {
        let issue = IssueRecord::new("SKU-1", issue_types::DUPLICATE_SKU, "appears 2 times");
        let json = serde_json::to_value(&issue).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "identifier": "SKU-1",
                "issue_type": "duplicate_sku",
                "issue_description": "appears 2 times",
            })
        );
    }

    #[test]
    fn test_display() {
        let issue = IssueRecord::new("", issue_types::INVALID_SKU_FORMAT, "empty");
        assert_eq!(issue.to_string(), "[invalid_sku_format] : empty");
    }
}
