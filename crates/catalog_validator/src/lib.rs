//! # Catalog Validator
//!
//! Validation engine for product catalogs. This crate provides:
//!
//! - The [`RuleChecker`] trait implemented by every business rule
//! - Built-in price, identifier and inventory checkers
//! - The [`ValidationEngine`] that runs registered checkers in order
//! - The metrics engine that turns issues into an integrity score
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{DataSet, RowBuilder, RuleConfig};
//! use catalog_validator::{MetricsEngine, ValidationEngine};
//!
//! let dataset = DataSet::from_rows(vec![
//!     RowBuilder::new()
//!         .value("sku", "SKU-00001")
//!         .value("price", "19.99")
//!         .value("inventory_count", "3")
//!         .build(),
//!     RowBuilder::new()
//!         .value("sku", "SKU-00002")
//!         .value("price", "24.50")
//!         .value("inventory_count", "12")
//!         .build(),
//! ]);
//!
//! let engine = ValidationEngine::with_default_checkers(&RuleConfig::default()).unwrap();
//! let issues = engine.run(&dataset).unwrap();
//! let metrics = MetricsEngine::default().compute(dataset.len(), &issues);
//!
//! assert_eq!(metrics.invalid_records(), 1);
//! assert_eq!(metrics.integrity_score(), 50.0);
//! ```

mod checker;
mod engine;
mod error;
mod identifier;
mod inventory;
mod metrics;
mod price;

pub use checker::*;
pub use engine::*;
pub use error::*;
pub use identifier::*;
pub use inventory::*;
pub use metrics::*;
pub use price::*;
