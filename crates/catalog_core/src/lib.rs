//! # Catalog Core
//!
//! Core data structures and types for the Catalog Automation Engine.
//!
//! This crate provides the building blocks shared by every other crate in the
//! workspace: the in-memory table that rule checkers scan, the uniform issue
//! record they emit, and the rule configuration they are constructed from.
//!
//! ## Key Concepts
//!
//! - **DataSet**: An ordered, read-only table of rows keyed by column name
//! - **IssueRecord**: A single data-quality problem tied to one row and one issue type
//! - **RuleConfig**: Named thresholds and patterns, defaulted or overridden per checker
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{DataSet, PriceRules, RowBuilder};
//!
//! let dataset = DataSet::from_rows(vec![
//!     RowBuilder::new()
//!         .value("sku", "SKU-00001")
//!         .value("price", "19.99")
//!         .value("inventory_count", "12")
//!         .build(),
//! ]);
//!
//! let rules = PriceRules::builder().max_price(500.0).build();
//! assert_eq!(rules.min_price, 0.01);
//! assert!(dataset.has_column("price"));
//! ```

pub mod builder;
pub mod config;
pub mod dataset;
pub mod error;
pub mod issue;

pub use builder::*;
pub use config::*;
pub use dataset::*;
pub use error::*;
pub use issue::*;
