//! Inventory level validation.

use crate::{RuleChecker, ValidationError, parse_integer, require_columns, row_identifier};
use catalog_core::{DataSet, DataValue, InventoryRules, IssueRecord, issue_types};

/// Validates that stock counts are integers at or above the stock floor and
/// warns about low stock.
///
/// `negative_inventory` and `low_stock_warning` are mutually exclusive per
/// row; the stock floor check wins.
#[derive(Debug, Clone, Default)]
pub struct InventoryChecker {
    rules: InventoryRules,
}

impl InventoryChecker {
    /// Checker name used in logs and errors.
    pub const NAME: &'static str = "InventoryChecker";

    /// Creates a new inventory checker.
    pub fn new(rules: InventoryRules) -> Self {
        Self { rules }
    }

    /// The resolved rules this checker runs with.
    pub fn rules(&self) -> &InventoryRules {
        &self.rules
    }

    fn check_value(&self, identifier: String, value: &DataValue) -> Option<IssueRecord> {
        let Some(stock) = parse_integer(value) else {
            return Some(IssueRecord::new(
                identifier,
                issue_types::INVALID_INVENTORY_FORMAT,
                format!("Inventory '{}' is not a valid integer", value),
            ));
        };

        if stock < self.rules.min_inventory {
            Some(IssueRecord::new(
                identifier,
                issue_types::NEGATIVE_INVENTORY,
                format!(
                    "Inventory {} is below the minimum of {}",
                    stock, self.rules.min_inventory
                ),
            ))
        } else if stock < self.rules.low_stock_threshold {
            Some(IssueRecord::new(
                identifier,
                issue_types::LOW_STOCK_WARNING,
                format!(
                    "Inventory {} is below threshold of {}",
                    stock, self.rules.low_stock_threshold
                ),
            ))
        } else {
            None
        }
    }
}

impl RuleChecker for InventoryChecker {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, dataset: &DataSet) -> Result<Vec<IssueRecord>, ValidationError> {
        require_columns(
            Self::NAME,
            dataset,
            &[
                self.rules.key_column.as_str(),
                self.rules.inventory_column.as_str(),
            ],
        )?;

        Ok(dataset
            .rows()
            .filter_map(|row| {
                let value = row.get(&self.rules.inventory_column)?;
                self.check_value(row_identifier(row, &self.rules.key_column), value)
            })
            .collect())
    }
}
