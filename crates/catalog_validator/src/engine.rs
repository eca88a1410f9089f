//! Main validation engine.
//!
//! This module provides the `ValidationEngine` that owns the registered rule
//! checkers, runs them in registration order against one dataset and
//! concatenates their issues.

use crate::{IdentifierChecker, InventoryChecker, PriceChecker, RuleChecker, ValidationError};
use catalog_core::{DataSet, IssueRecord, RuleConfig};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of one checker within a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerSummary {
    /// Checker name
    pub name: String,
    /// Number of issues the checker reported
    pub issue_count: usize,
}

/// Result of a successful validation run.
#[derive(Debug, Clone)]
pub struct ValidationRun {
    /// All issues, in checker order then row order
    pub issues: Vec<IssueRecord>,
    /// Per-checker issue counts, in registration order
    pub checkers: Vec<CheckerSummary>,
    /// Number of rows validated
    pub records_validated: usize,
    /// Validation duration in milliseconds
    pub duration_ms: u64,
}

/// Main validation engine for catalog datasets.
///
/// Validation is all-or-nothing at the checker level: if any checker fails
/// structurally, the run aborts and the issues gathered so far are discarded.
/// Row-level issues never abort a run.
///
/// # Example
///
/// ```rust
/// use catalog_core::{DataSet, RowBuilder, RuleConfig};
/// use catalog_validator::ValidationEngine;
///
/// let dataset = DataSet::from_rows(vec![
///     RowBuilder::new()
///         .value("sku", "SKU-00001")
///         .value("price", "0")
///         .value("inventory_count", "40")
///         .build(),
/// ]);
///
/// let engine = ValidationEngine::with_default_checkers(&RuleConfig::default()).unwrap();
/// let issues = engine.run(&dataset).unwrap();
///
/// assert_eq!(issues.len(), 1);
/// assert_eq!(issues[0].issue_type(), "price_too_low");
/// ```
#[derive(Default)]
pub struct ValidationEngine {
    checkers: Vec<Box<dyn RuleChecker>>,
}

impl ValidationEngine {
    /// Creates an engine with no checkers registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the price, identifier and inventory checkers,
    /// registered in that order.
    pub fn with_default_checkers(config: &RuleConfig) -> Result<Self, ValidationError> {
        config
            .price
            .validate()
            .map_err(|e| ValidationError::invalid_config(PriceChecker::NAME, e))?;
        config
            .inventory
            .validate()
            .map_err(|e| ValidationError::invalid_config(InventoryChecker::NAME, e))?;

        Ok(Self::new()
            .with_checker(PriceChecker::new(config.price.clone()))
            .with_checker(IdentifierChecker::new(config.identifier.clone())?)
            .with_checker(InventoryChecker::new(config.inventory.clone())))
    }

    /// Registers a checker after the ones already registered.
    pub fn register<C: RuleChecker + 'static>(&mut self, checker: C) {
        debug!("Registering checker {}", checker.name());
        self.checkers.push(Box::new(checker));
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with_checker<C: RuleChecker + 'static>(mut self, checker: C) -> Self {
        self.register(checker);
        self
    }

    /// Names of the registered checkers, in registration order.
    pub fn checker_names(&self) -> Vec<&str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    /// Number of registered checkers.
    pub fn len(&self) -> usize {
        self.checkers.len()
    }

    /// Returns true if no checker is registered.
    pub fn is_empty(&self) -> bool {
        self.checkers.is_empty()
    }

    /// Runs every checker and returns the concatenated issues.
    pub fn run(&self, dataset: &DataSet) -> Result<Vec<IssueRecord>, ValidationError> {
        self.run_with_summary(dataset).map(|run| run.issues)
    }

    /// Runs every checker and returns the issues along with per-checker
    /// counts and timing.
    pub fn run_with_summary(&self, dataset: &DataSet) -> Result<ValidationRun, ValidationError> {
        let start = Instant::now();
        let mut issues = Vec::new();
        let mut checkers = Vec::with_capacity(self.checkers.len());

        for checker in &self.checkers {
            let name = checker.name();
            debug!("Running {} on {} rows", name, dataset.len());

            let found = checker.validate(dataset).map_err(|err| {
                warn!("{} aborted the validation run: {}", name, err);
                attribute(err, name)
            })?;

            info!("{} found {} issue(s)", name, found.len());
            checkers.push(CheckerSummary {
                name: name.to_string(),
                issue_count: found.len(),
            });
            issues.extend(found);
        }

        Ok(ValidationRun {
            issues,
            checkers,
            records_validated: dataset.len(),
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }
}

/// Makes sure a fatal error names the checker that raised it.
fn attribute(err: ValidationError, checker: &str) -> ValidationError {
    match err {
        ValidationError::General(message) => ValidationError::checker_failed(checker, message),
        other => other,
    }
}
