//! Ingestion and settings loading for the catalog pipeline.
//!
//! This crate turns files into the values the validator consumes:
//!
//! - [`load_csv`] reads a catalog export into a [`catalog_core::DataSet`]
//! - [`Settings::resolve`] reads a YAML/TOML settings file and applies
//!   `CATALOG_*` environment overrides on top of the compiled-in defaults
//!
//! # Example
//!
//! ```no_run
//! use catalog_loader::{Settings, load_csv};
//!
//! let settings = Settings::resolve(None).unwrap();
//! let dataset = load_csv(&settings.data_path).unwrap();
//! println!("Loaded {} records", dataset.len());
//! ```

mod error;
mod ingest;
mod settings;

pub use error::*;
pub use ingest::*;
pub use settings::*;
