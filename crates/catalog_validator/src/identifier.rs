//! Identifier format and uniqueness validation.

use crate::{RuleChecker, ValidationError, require_columns};
use catalog_core::{DataSet, IdentifierRules, IssueRecord, issue_types};
use regex::Regex;
use std::collections::HashMap;

/// Validates identifier format and detects duplicate identifiers.
///
/// The format and duplicate checks are independent: a row can report both.
/// Duplicates are reported once per occurrence, so a value that appears three
/// times yields three `duplicate_sku` issues.
#[derive(Debug, Clone)]
pub struct IdentifierChecker {
    rules: IdentifierRules,
    pattern: Regex,
}

impl IdentifierChecker {
    /// Checker name used in logs and errors.
    pub const NAME: &'static str = "IdentifierChecker";

    /// Creates a new identifier checker, compiling the configured pattern.
    pub fn new(rules: IdentifierRules) -> Result<Self, ValidationError> {
        let pattern = Regex::new(&rules.identifier_pattern).map_err(|e| {
            ValidationError::invalid_pattern(Self::NAME, &rules.identifier_pattern, e)
        })?;
        Ok(Self { rules, pattern })
    }

    /// The resolved rules this checker runs with.
    pub fn rules(&self) -> &IdentifierRules {
        &self.rules
    }

    /// Counts occurrences of every non-missing identifier.
    fn occurrence_counts(&self, dataset: &DataSet) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for value in dataset.column_values(&self.rules.key_column) {
            if !value.is_null() {
                *counts.entry(value.to_string()).or_insert(0) += 1;
            }
        }
        counts
    }
}

impl RuleChecker for IdentifierChecker {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn validate(&self, dataset: &DataSet) -> Result<Vec<IssueRecord>, ValidationError> {
        require_columns(Self::NAME, dataset, &[self.rules.key_column.as_str()])?;

        let counts = self.occurrence_counts(dataset);
        let mut issues = Vec::new();

        for value in dataset.column_values(&self.rules.key_column) {
            let identifier = value.to_string();

            if !self.pattern.is_match(&identifier) {
                issues.push(IssueRecord::new(
                    identifier.clone(),
                    issue_types::INVALID_SKU_FORMAT,
                    format!(
                        "SKU '{}' does not match pattern {}",
                        identifier, self.rules.identifier_pattern
                    ),
                ));
            }

            if value.is_null() {
                continue;
            }
            if let Some(&count) = counts.get(&identifier).filter(|&&count| count > 1) {
                issues.push(IssueRecord::new(
                    identifier.clone(),
                    issue_types::DUPLICATE_SKU,
                    format!("SKU '{}' appears {} times in catalog", identifier, count),
                ));
            }
        }

        Ok(issues)
    }
}
