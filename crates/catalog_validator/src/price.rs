//! Price range validation.

use crate::{RuleChecker, ValidationError, parse_number, require_columns, row_identifier};
use catalog_core::{DataSet, DataValue, IssueRecord, PriceRules, issue_types};

/// Validates that every price lies in the open interval `(min_price, max_price)`.
///
/// At most one issue is reported per row: a format error takes precedence,
/// and a parsed price is either too low or too high, never both.
#[derive(Debug, Clone, Default)]
pub struct PriceChecker {
    rules: PriceRules,
}

impl PriceChecker {
    /// Checker name used in logs and errors.
    pub const NAME: &'static str = "PriceChecker";

    /// Creates a new price checker.
    pub fn new(rules: PriceRules) -> Self {
        Self { rules }
    }

    /// The resolved rules this checker runs with.
    pub fn rules(&self) -> &PriceRules {
        &self.rules
    }

    fn check_value(&self, identifier: String, value: &DataValue) -> Option<IssueRecord> {
        let Some(price) = parse_number(value) else {
            return Some(IssueRecord::new(
                identifier,
                issue_types::INVALID_PRICE_FORMAT,
                format!("Price '{}' is not a valid number", value),
            ));
        };

        if price <= self.rules.min_price {
            Some(IssueRecord::new(
                identifier,
                issue_types::PRICE_TOO_LOW,
                format!("Price {} must be > {}", price, self.rules.min_price),
            ))
        } else if price >= self.rules.max_price {
            Some(IssueRecord::new(
                identifier,
                issue_types::PRICE_TOO_HIGH,
                format!("Price {} must be < {}", price, self.rules.max_price),
            ))
        } else {
            None
        }
    }
}

impl RuleChecker for PriceChecker {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, dataset: &DataSet) -> Result<Vec<IssueRecord>, ValidationError> {
        require_columns(
            Self::NAME,
            dataset,
            &[self.rules.key_column.as_str(), self.rules.price_column.as_str()],
        )?;

        Ok(dataset
            .rows()
            .filter_map(|row| {
                let value = row.get(&self.rules.price_column)?;
                self.check_value(row_identifier(row, &self.rules.key_column), value)
            })
            .collect())
    }
}
