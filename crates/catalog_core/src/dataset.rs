//! Dataset representation for validation.
//!
//! This module provides the in-memory table that rule checkers scan. A
//! `DataSet` is built once by ingestion and is read-only for the rest of the
//! run; every row carries a value for every column.

use std::collections::HashMap;
use std::fmt;

/// A value in a dataset.
///
/// Ingestion keeps cells as raw text; programmatic callers may also store
/// numbers directly. Checkers are responsible for parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum DataValue {
    /// Null/missing value
    Null,
    /// String value
    String(String),
    /// Integer value
    Int(i64),
    /// Floating point value
    Float(f64),
    /// Boolean value
    Bool(bool),
}

impl DataValue {
    /// Returns true if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, DataValue::Null)
    }
}

/// Renders the raw value. Null renders as the empty string.
impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Null => Ok(()),
            DataValue::String(s) => f.write_str(s),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Float(v) => write!(f, "{}", v),
            DataValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for DataValue {
    fn from(s: String) -> Self {
        DataValue::String(s)
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::String(s.to_string())
    }
}

impl From<i64> for DataValue {
    fn from(i: i64) -> Self {
        DataValue::Int(i)
    }
}

impl From<f64> for DataValue {
    fn from(f: f64) -> Self {
        DataValue::Float(f)
    }
}

impl From<bool> for DataValue {
    fn from(b: bool) -> Self {
        DataValue::Bool(b)
    }
}

impl<T: Into<DataValue>> From<Option<T>> for DataValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(DataValue::Null)
    }
}

static NULL: DataValue = DataValue::Null;

/// A single row of data.
pub type DataRow = HashMap<String, DataValue>;

/// A dataset containing multiple rows that share one column set.
///
/// The column list is the dataset's schema: a checker whose required column
/// is not in it is misconfigured, regardless of the row count.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    /// Column names in schema order
    columns: Vec<String>,
    /// The data rows
    rows: Vec<DataRow>,
}

impl DataSet {
    /// Creates a new empty dataset with no columns.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a dataset with an explicit schema.
    ///
    /// Rows missing a column get `Null` for it; keys outside `columns` are
    /// appended to the schema.
    pub fn with_columns<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<DataRow>,
    ) -> Self {
        let mut dataset = Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::with_capacity(rows.len()),
        };
        for row in rows {
            dataset.add_row(row);
        }
        dataset
    }

    /// Creates a new dataset from rows, inferring the schema.
    ///
    /// The column list is the sorted union of every row's keys.
    pub fn from_rows(rows: Vec<DataRow>) -> Self {
        let mut columns: Vec<String> = rows
            .iter()
            .flat_map(|row| row.keys().cloned())
            .collect();
        columns.sort();
        columns.dedup();
        Self::with_columns(columns, rows)
    }

    /// Returns the column names in schema order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns true if `name` is part of the schema.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Returns the number of rows in the dataset.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &DataRow> {
        self.rows.iter()
    }

    /// Returns an iterator over one column's values in row order.
    ///
    /// Yields `Null` for every row when the column is unknown.
    pub fn column_values<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a DataValue> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(name).unwrap_or(&NULL))
    }

    /// Gets a specific row by index.
    pub fn get_row(&self, index: usize) -> Option<&DataRow> {
        self.rows.get(index)
    }

    /// Adds a row to the dataset, keeping every row on the same column set.
    pub fn add_row(&mut self, mut row: DataRow) {
        for key in row.keys() {
            if !self.columns.contains(key) {
                self.columns.push(key.clone());
                for existing in &mut self.rows {
                    existing.insert(key.clone(), DataValue::Null);
                }
            }
        }
        for column in &self.columns {
            row.entry(column.clone()).or_insert(DataValue::Null);
        }
        self.rows.push(row);
    }
}

impl FromIterator<DataRow> for DataSet {
    fn from_iter<T: IntoIterator<Item = DataRow>>(iter: T) -> Self {
        Self::from_rows(iter.into_iter().collect())
    }
}
