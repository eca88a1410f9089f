//! CSV ingestion into a [`DataSet`].

use crate::{LoaderError, Result};
use catalog_core::{DataRow, DataSet, DataValue};
use std::path::Path;
use tracing::info;

/// Parses headed CSV text into a dataset.
///
/// The schema is the header in file order. Cells are kept as raw text so
/// checkers see exactly what the file contained; blank cells become
/// [`DataValue::Null`]. A row with a different number of fields than the
/// header is an error.
///
/// # Example
///
/// ```rust
/// use catalog_loader::parse_csv;
///
/// let dataset = parse_csv("sku,price\nSKU-00001,19.99\nSKU-00002,\n").unwrap();
///
/// assert_eq!(dataset.columns(), &["sku", "price"]);
/// assert_eq!(dataset.len(), 2);
/// assert!(dataset.get_row(1).unwrap()["price"].is_null());
/// ```
pub fn parse_csv(content: &str) -> Result<DataSet> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    for (i, header) in headers.iter().enumerate() {
        if headers[..i].contains(header) {
            return Err(LoaderError::DuplicateColumn(header.clone()));
        }
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: DataRow = headers
            .iter()
            .zip(record.iter())
            .map(|(column, cell)| (column.clone(), cell_value(cell)))
            .collect();
        rows.push(row);
    }

    Ok(DataSet::with_columns(headers, rows))
}

/// Loads a headed CSV file into a dataset.
///
/// See [`parse_csv`] for the cell conventions.
pub fn load_csv(path: &Path) -> Result<DataSet> {
    let content = std::fs::read_to_string(path).map_err(|e| LoaderError::io(path, e))?;
    let dataset = parse_csv(&content)?;

    info!(
        "Loaded {} records with {} columns from {}",
        dataset.len(),
        dataset.columns().len(),
        path.display()
    );
    Ok(dataset)
}

fn cell_value(cell: &str) -> DataValue {
    if cell.trim().is_empty() {
        DataValue::Null
    } else {
        DataValue::String(cell.to_string())
    }
}
