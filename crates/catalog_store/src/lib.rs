//! Relational record store for validated catalogs.
//!
//! This crate persists a catalog [`DataSet`](catalog_core::DataSet) and its
//! issue collection, and answers the analytic questions operators ask after a
//! validation run:
//!
//! - duplicate identifiers
//! - record counts per category
//! - products above a price threshold
//! - total stock per category
//!
//! [`RecordStore`] is the contract; [`SqliteStore`] implements it on SQLite.
//!
//! # Example
//!
//! ```no_run
//! use catalog_store::{RecordStore, SqliteStore, StoreConfig};
//! use std::path::Path;
//!
//! # fn example(dataset: &catalog_core::DataSet) -> catalog_store::Result<()> {
//! let mut store = SqliteStore::open(Path::new("catalog.db"), StoreConfig::default())?;
//! store.load_dataset(dataset)?;
//!
//! for category in store.records_by_category()? {
//!     println!("{:?}: {}", category.category, category.record_count);
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod model;
mod store;

pub use config::{
    DEFAULT_CATEGORY_COLUMN, DEFAULT_NAME_COLUMN, DEFAULT_TABLE_NAME, StoreConfig,
    StoreConfigBuilder,
};
pub use error::{Result, StoreError};
pub use model::*;
pub use store::*;
