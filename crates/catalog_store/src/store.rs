//! The record store contract and its SQLite implementation.

use crate::config::quote_identifier;
use crate::{
    CategoryCount, CategoryInventory, DuplicateIdentifier, HighPriceProduct, QueryRow, Result,
    StoreConfig, StoreError,
};
use catalog_core::{DataSet, DataValue, IssueRecord};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{Connection, Params, Row, params, params_from_iter};
use std::path::Path;
use tracing::{debug, info};

/// Table the issue collection is saved into.
pub const ISSUES_TABLE: &str = "validation_issues";
/// Surrogate key added to the products table.
pub const ROW_ID_COLUMN: &str = "id";

/// A relational store for a validated catalog and its issues.
///
/// Loading replaces whatever the store held before; the analytic queries
/// always read the most recently loaded dataset.
pub trait RecordStore {
    /// Recreates the products table from the dataset and inserts every row.
    ///
    /// Returns the number of rows inserted.
    fn load_dataset(&mut self, dataset: &DataSet) -> Result<usize>;

    /// Recreates the issues table and inserts the issues in order.
    fn save_issues(&mut self, issues: &[IssueRecord]) -> Result<usize>;

    /// Identifiers occurring more than once, most frequent first.
    fn duplicate_identifiers(&self) -> Result<Vec<DuplicateIdentifier>>;

    /// Record counts per category, largest first.
    fn records_by_category(&self) -> Result<Vec<CategoryCount>>;

    /// Products priced strictly above `threshold`, most expensive first.
    fn high_price_products(&self, threshold: f64) -> Result<Vec<HighPriceProduct>>;

    /// Total stock per category, largest first.
    fn inventory_by_category(&self) -> Result<Vec<CategoryInventory>>;

    /// Runs an arbitrary statement with bound parameters.
    fn execute_query(&self, sql: &str, params: &[DataValue]) -> Result<Vec<QueryRow>>;
}

/// SQL storage class inferred for a dataset column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColumnType {
    /// Every non-null cell is an integer
    Integer,
    /// Every non-null cell is a finite number
    Real,
    /// Anything else
    Text,
}

impl ColumnType {
    /// SQL type name.
    pub fn sql_name(&self) -> &'static str {
        match self {
            Self::Integer => "INTEGER",
            Self::Real => "REAL",
            Self::Text => "TEXT",
        }
    }

    /// Infers the narrowest type holding every non-null value.
    ///
    /// An all-null column is `Text`.
    pub fn infer<'a>(values: impl Iterator<Item = &'a DataValue>) -> Self {
        let mut inferred = None;
        for value in values.filter(|v| !v.is_null()) {
            let kind = Self::of_value(value);
            inferred = Some(inferred.map_or(kind, |current: Self| current.max(kind)));
            if kind == Self::Text {
                break;
            }
        }
        inferred.unwrap_or(Self::Text)
    }

    fn of_value(value: &DataValue) -> Self {
        if integer_value(value).is_some() {
            Self::Integer
        } else if real_value(value).is_some() {
            Self::Real
        } else {
            Self::Text
        }
    }

    fn to_sql(self, value: &DataValue) -> Value {
        if value.is_null() {
            return Value::Null;
        }
        let converted = match self {
            Self::Integer => integer_value(value).map(Value::Integer),
            Self::Real => real_value(value).map(Value::Real),
            Self::Text => None,
        };
        converted.unwrap_or_else(|| Value::Text(value.to_string()))
    }
}

fn integer_value(value: &DataValue) -> Option<i64> {
    match value {
        DataValue::Int(i) => Some(*i),
        DataValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn real_value(value: &DataValue) -> Option<f64> {
    let number = match value {
        DataValue::Int(i) => *i as f64,
        DataValue::Float(f) => *f,
        DataValue::String(s) => s.trim().parse().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

fn to_sql_param(value: &DataValue) -> Value {
    match value {
        DataValue::Null => Value::Null,
        DataValue::String(s) => Value::Text(s.clone()),
        DataValue::Int(i) => Value::Integer(*i),
        DataValue::Float(f) => Value::Real(*f),
        DataValue::Bool(b) => Value::Integer(i64::from(*b)),
    }
}

fn from_sql_value(value: ValueRef<'_>) -> DataValue {
    match value {
        ValueRef::Null => DataValue::Null,
        ValueRef::Integer(i) => DataValue::Int(i),
        ValueRef::Real(f) => DataValue::Float(f),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            DataValue::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// Record store backed by a SQLite database.
///
/// # Example
///
/// ```rust
/// use catalog_core::{DataSet, RowBuilder};
/// use catalog_store::{RecordStore, SqliteStore, StoreConfig};
///
/// let dataset = DataSet::from_rows(vec![
///     RowBuilder::new().value("sku", "SKU-00001").value("category", "Tools").build(),
///     RowBuilder::new().value("sku", "SKU-00001").value("category", "Tools").build(),
/// ]);
///
/// let mut store = SqliteStore::in_memory(StoreConfig::default()).unwrap();
/// store.load_dataset(&dataset).unwrap();
///
/// let duplicates = store.duplicate_identifiers().unwrap();
/// assert_eq!(duplicates[0].occurrence_count, 2);
/// ```
pub struct SqliteStore {
    conn: Connection,
    config: StoreConfig,
}

impl SqliteStore {
    /// Opens (or creates) the database file at `path`.
    pub fn open(path: &Path, config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let conn = Connection::open(path)?;
        info!("Opened SQLite database at {}", path.display());
        Ok(Self { conn, config })
    }

    /// Opens a private in-memory database.
    pub fn in_memory(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn, config })
    }

    /// The table and column names this store uses.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Column names of `table`, empty if the table does not exist.
    pub fn table_columns(&self, table: &str) -> Result<Vec<String>> {
        let sql = format!("PRAGMA table_info({})", quote_identifier(table));
        self.query_rows(&sql, [], |row| row.get::<_, String>(1))
    }

    fn require_columns(&self, columns: &[&str]) -> Result<()> {
        let table = &self.config.table_name;
        let existing = self.table_columns(table)?;
        if existing.is_empty() {
            return Err(StoreError::TableNotFound(table.clone()));
        }
        match columns
            .iter()
            .copied()
            .find(|c| !existing.iter().any(|e| e == c))
        {
            Some(missing) => Err(StoreError::missing_column(table.as_str(), missing)),
            None => Ok(()),
        }
    }

    fn query_rows<T, P, F>(&self, sql: &str, params: P, f: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        debug!("Executing query: {}", sql);
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, f)?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }
}

impl RecordStore for SqliteStore {
    fn load_dataset(&mut self, dataset: &DataSet) -> Result<usize> {
        let columns = dataset.columns();
        if let Some(reserved) = columns
            .iter()
            .find(|c| c.eq_ignore_ascii_case(ROW_ID_COLUMN))
        {
            return Err(StoreError::ReservedColumn(reserved.clone()));
        }

        let types: Vec<ColumnType> = columns
            .iter()
            .map(|c| ColumnType::infer(dataset.column_values(c)))
            .collect();

        let table = quote_identifier(&self.config.table_name);
        let mut definitions = vec![format!("{} INTEGER PRIMARY KEY AUTOINCREMENT", ROW_ID_COLUMN)];
        definitions.extend(
            columns
                .iter()
                .zip(&types)
                .map(|(c, t)| format!("{} {}", quote_identifier(c), t.sql_name())),
        );

        let insert = if columns.is_empty() {
            format!("INSERT INTO {} DEFAULT VALUES", table)
        } else {
            format!(
                "INSERT INTO {} ({}) VALUES ({})",
                table,
                columns
                    .iter()
                    .map(|c| quote_identifier(c))
                    .collect::<Vec<_>>()
                    .join(", "),
                vec!["?"; columns.len()].join(", ")
            )
        };

        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {table}; CREATE TABLE {table} ({});",
            definitions.join(", ")
        ))?;
        debug!(
            "Created table {} with {} columns",
            self.config.table_name,
            definitions.len()
        );

        let mut inserted = 0;
        {
            let mut stmt = tx.prepare(&insert)?;
            for row in dataset.rows() {
                let values: Vec<Value> = columns
                    .iter()
                    .zip(&types)
                    .map(|(c, t)| row.get(c).map_or(Value::Null, |v| t.to_sql(v)))
                    .collect();
                inserted += stmt.execute(params_from_iter(values.iter()))?;
            }
        }
        tx.commit()?;

        info!(
            "Inserted {} records into table '{}'",
            inserted, self.config.table_name
        );
        Ok(inserted)
    }

    fn save_issues(&mut self, issues: &[IssueRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {table};
             CREATE TABLE {table} (
                 {id} INTEGER PRIMARY KEY AUTOINCREMENT,
                 identifier TEXT NOT NULL,
                 issue_type TEXT NOT NULL,
                 issue_description TEXT NOT NULL
             );",
            table = ISSUES_TABLE,
            id = ROW_ID_COLUMN
        ))?;

        let mut saved = 0;
        {
            let mut stmt = tx.prepare(&format!(
                "INSERT INTO {} (identifier, issue_type, issue_description) VALUES (?1, ?2, ?3)",
                ISSUES_TABLE
            ))?;
            for issue in issues {
                saved += stmt.execute(params![
                    issue.identifier(),
                    issue.issue_type(),
                    issue.issue_description()
                ])?;
            }
        }
        tx.commit()?;

        info!("Saved {} issues into table '{}'", saved, ISSUES_TABLE);
        Ok(saved)
    }

    fn duplicate_identifiers(&self) -> Result<Vec<DuplicateIdentifier>> {
        self.require_columns(&[self.config.key_column.as_str()])?;
        let key = quote_identifier(&self.config.key_column);
        let sql = format!(
            "SELECT CAST({key} AS TEXT), COUNT(*) AS occurrence_count
             FROM {table}
             WHERE {key} IS NOT NULL
             GROUP BY {key}
             HAVING COUNT(*) > 1
             ORDER BY occurrence_count DESC, 1",
            table = quote_identifier(&self.config.table_name),
        );

        self.query_rows(&sql, [], |row| {
            Ok(DuplicateIdentifier {
                identifier: row.get(0)?,
                occurrence_count: row.get(1)?,
            })
        })
    }

    fn records_by_category(&self) -> Result<Vec<CategoryCount>> {
        self.require_columns(&[self.config.category_column.as_str()])?;
        let category = quote_identifier(&self.config.category_column);
        let sql = format!(
            "SELECT CAST({category} AS TEXT), COUNT(*) AS record_count
             FROM {table}
             GROUP BY {category}
             ORDER BY record_count DESC, 1",
            table = quote_identifier(&self.config.table_name),
        );

        self.query_rows(&sql, [], |row| {
            Ok(CategoryCount {
                category: row.get(0)?,
                record_count: row.get(1)?,
            })
        })
    }

    fn high_price_products(&self, threshold: f64) -> Result<Vec<HighPriceProduct>> {
        self.require_columns(&[
            self.config.key_column.as_str(),
            self.config.name_column.as_str(),
            self.config.price_column.as_str(),
        ])?;
        let price = quote_identifier(&self.config.price_column);
        let sql = format!(
            "SELECT COALESCE(CAST({key} AS TEXT), ''), CAST({name} AS TEXT), CAST({price} AS REAL) AS price_value
             FROM {table}
             WHERE {price} IS NOT NULL AND CAST({price} AS REAL) > ?1
             ORDER BY price_value DESC, 1",
            key = quote_identifier(&self.config.key_column),
            name = quote_identifier(&self.config.name_column),
            table = quote_identifier(&self.config.table_name),
        );

        self.query_rows(&sql, params![threshold], |row| {
            Ok(HighPriceProduct {
                identifier: row.get(0)?,
                product_name: row.get(1)?,
                price: row.get(2)?,
            })
        })
    }

    fn inventory_by_category(&self) -> Result<Vec<CategoryInventory>> {
        self.require_columns(&[
            self.config.category_column.as_str(),
            self.config.inventory_column.as_str(),
        ])?;
        let category = quote_identifier(&self.config.category_column);
        let sql = format!(
            "SELECT CAST({category} AS TEXT), COALESCE(SUM(CAST({inventory} AS INTEGER)), 0) AS total_inventory
             FROM {table}
             GROUP BY {category}
             ORDER BY total_inventory DESC, 1",
            inventory = quote_identifier(&self.config.inventory_column),
            table = quote_identifier(&self.config.table_name),
        );

        self.query_rows(&sql, [], |row| {
            Ok(CategoryInventory {
                category: row.get(0)?,
                total_inventory: row.get(1)?,
            })
        })
    }

    fn execute_query(&self, sql: &str, params: &[DataValue]) -> Result<Vec<QueryRow>> {
        debug!("Executing query: {}", sql);
        let mut stmt = self.conn.prepare(sql)?;
        let names: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let values: Vec<Value> = params.iter().map(to_sql_param).collect();

        let mut results = Vec::new();
        let mut rows = stmt.query(params_from_iter(values.iter()))?;
        while let Some(row) = rows.next()? {
            let mut record = Vec::with_capacity(names.len());
            for (i, name) in names.iter().enumerate() {
                record.push((name.clone(), from_sql_value(row.get_ref(i)?)));
            }
            results.push(record);
        }
        Ok(results)
    }
}
