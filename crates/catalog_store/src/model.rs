//! Rows returned by the analytic queries.

use catalog_core::DataValue;
use serde::Serialize;

/// An identifier that appears more than once in the loaded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateIdentifier {
    /// The duplicated identifier
    pub identifier: String,
    /// Number of rows carrying it
    pub occurrence_count: i64,
}

/// Number of records in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category, `None` for rows without one
    pub category: Option<String>,
    /// Number of records
    pub record_count: i64,
}

/// A product priced above the high-price threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighPriceProduct {
    /// Product identifier
    pub identifier: String,
    /// Product name, if any
    pub product_name: Option<String>,
    /// Price
    pub price: f64,
}

/// Total stock held in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryInventory {
    /// Category, `None` for rows without one
    pub category: Option<String>,
    /// Sum of the stock counts
    pub total_inventory: i64,
}

/// One result row of an ad-hoc query: column names with their values, in
/// select-list order.
pub type QueryRow = Vec<(String, DataValue)>;
