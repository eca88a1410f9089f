//! Pipeline settings (YAML/TOML) with environment overrides.
//!
//! Settings are resolved in three layers: compiled-in defaults, an optional
//! settings file, then `CATALOG_*` environment variables. Every key is
//! optional in the file; keys it does not name keep their default.
//!
//! # Example
//!
//! ```rust
//! use catalog_loader::parse_yaml;
//!
//! let yaml = r#"
//! data_path: data/catalog.csv
//! rules:
//!   price:
//!     max_price: 500.0
//! "#;
//!
//! let settings = parse_yaml(yaml).unwrap();
//! assert_eq!(settings.rules.price.max_price, 500.0);
//! assert_eq!(settings.rules.price.min_price, 0.01);
//! assert_eq!(settings.table_name, "products");
//! ```

use crate::{LoaderError, Result};
use catalog_core::{CoreError, RuleConfig};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Overrides the CSV input path.
pub const ENV_DATA_PATH: &str = "CATALOG_DATA_PATH";
/// Overrides the SQLite database path.
pub const ENV_DB_PATH: &str = "CATALOG_DB_PATH";
/// Overrides the report output directory.
pub const ENV_REPORT_DIR: &str = "CATALOG_REPORT_DIR";
/// Overrides the exclusive minimum price.
pub const ENV_MIN_PRICE: &str = "CATALOG_MIN_PRICE";
/// Overrides the exclusive maximum price.
pub const ENV_MAX_PRICE: &str = "CATALOG_MAX_PRICE";
/// Overrides the minimum inventory.
pub const ENV_MIN_INVENTORY: &str = "CATALOG_MIN_INVENTORY";
/// Overrides the low-stock threshold.
pub const ENV_LOW_STOCK_THRESHOLD: &str = "CATALOG_LOW_STOCK_THRESHOLD";
/// Overrides the identifier pattern.
pub const ENV_IDENTIFIER_PATTERN: &str = "CATALOG_IDENTIFIER_PATTERN";

/// Supported settings file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
}

/// Everything one pipeline run needs to know.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Catalog CSV to validate
    pub data_path: PathBuf,
    /// SQLite database file
    pub database_path: PathBuf,
    /// Table the catalog is loaded into
    pub table_name: String,
    /// Directory for the validation report
    pub report_dir: PathBuf,
    /// File name of the validation report
    pub report_filename: String,
    /// Number of issue types shown in rankings
    pub top_issues: usize,
    /// Price above which a product is listed by the high-price query
    pub high_price_threshold: f64,
    /// Column grouped by the category queries
    pub category_column: String,
    /// Column holding the product name
    pub name_column: String,
    /// Rule checker configuration
    pub rules: RuleConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data/sample_catalog.csv"),
            database_path: PathBuf::from("catalog.db"),
            table_name: "products".to_string(),
            report_dir: PathBuf::from("output"),
            report_filename: "validation_report.csv".to_string(),
            top_issues: 5,
            high_price_threshold: 5000.0,
            category_column: "category".to_string(),
            name_column: "product_name".to_string(),
            rules: RuleConfig::default(),
        }
    }
}

impl Settings {
    /// Resolves settings from an optional file plus the process environment,
    /// and validates the result.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(path) => load_settings(path)?,
            None => Self::default(),
        };
        settings.apply_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Applies `CATALOG_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Applies `CATALOG_*` overrides read through `lookup`.
    ///
    /// Variables that are unset are ignored. A numeric variable that does
    /// not parse is an error rather than being silently dropped.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(ENV_DATA_PATH) {
            info!(old = ?self.data_path, new = ?value, "Overriding data path via ENV");
            self.data_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_DB_PATH) {
            info!(old = ?self.database_path, new = ?value, "Overriding database path via ENV");
            self.database_path = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_REPORT_DIR) {
            info!(old = ?self.report_dir, new = ?value, "Overriding report directory via ENV");
            self.report_dir = PathBuf::from(value);
        }
        if let Some(value) = lookup(ENV_MIN_PRICE) {
            self.rules.price.min_price = parse_override(ENV_MIN_PRICE, &value)?;
            debug!("min_price = {}", self.rules.price.min_price);
        }
        if let Some(value) = lookup(ENV_MAX_PRICE) {
            self.rules.price.max_price = parse_override(ENV_MAX_PRICE, &value)?;
            debug!("max_price = {}", self.rules.price.max_price);
        }
        if let Some(value) = lookup(ENV_MIN_INVENTORY) {
            self.rules.inventory.min_inventory = parse_override(ENV_MIN_INVENTORY, &value)?;
            debug!("min_inventory = {}", self.rules.inventory.min_inventory);
        }
        if let Some(value) = lookup(ENV_LOW_STOCK_THRESHOLD) {
            self.rules.inventory.low_stock_threshold =
                parse_override(ENV_LOW_STOCK_THRESHOLD, &value)?;
            debug!(
                "low_stock_threshold = {}",
                self.rules.inventory.low_stock_threshold
            );
        }
        if let Some(value) = lookup(ENV_IDENTIFIER_PATTERN) {
            debug!("identifier_pattern = {}", value);
            self.rules.identifier.identifier_pattern = value;
        }
        Ok(())
    }

    /// Checks the resolved settings for consistency.
    pub fn validate(&self) -> Result<()> {
        self.rules.validate()?;
        if self.table_name.trim().is_empty() {
            return Err(
                CoreError::invalid_config("table_name", "table name must not be empty").into(),
            );
        }
        if self.report_filename.trim().is_empty() {
            return Err(CoreError::invalid_config(
                "report_filename",
                "report file name must not be empty",
            )
            .into());
        }
        if !self.high_price_threshold.is_finite() {
            return Err(CoreError::invalid_config(
                "high_price_threshold",
                "threshold must be a finite number",
            )
            .into());
        }
        Ok(())
    }

    /// Full path of the validation report.
    pub fn report_path(&self) -> PathBuf {
        self.report_dir.join(&self.report_filename)
    }
}

fn parse_override<T>(variable: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| LoaderError::invalid_override(variable, value, e))
}

/// Parse settings from a YAML string.
///
/// An empty document yields the defaults.
pub fn parse_yaml(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = serde_yaml_ng::from_str(content)?;
    Ok(settings)
}

/// Parse settings from a TOML string.
pub fn parse_toml(content: &str) -> Result<Settings> {
    let settings: Settings =
        toml::from_str(content).map_err(|e| LoaderError::Toml(e.to_string()))?;
    Ok(settings)
}

/// Detect the settings format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `SettingsFormat::Yaml`
/// * `.toml` → `SettingsFormat::Toml`
///
/// # Errors
///
/// Returns `LoaderError::InvalidExtension` if the file has no extension.
/// Returns `LoaderError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<SettingsFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(LoaderError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(SettingsFormat::Yaml),
        "toml" => Ok(SettingsFormat::Toml),
        other => Err(LoaderError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse settings from a file with automatic format detection.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;

    let settings = match format {
        SettingsFormat::Yaml => parse_yaml(&content),
        SettingsFormat::Toml => parse_toml(&content),
    }?;
    info!("Loaded settings from {}", path.display());
    Ok(settings)
}
