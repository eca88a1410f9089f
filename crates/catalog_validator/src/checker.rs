//! The rule checker contract shared by built-in and custom checkers.

use crate::ValidationError;
use catalog_core::{DataRow, DataSet, DataValue, IssueRecord};

/// Core trait for a self-contained validation rule.
///
/// A checker scans the whole dataset and reports every data-quality problem
/// it finds as an [`IssueRecord`]. It must not mutate the dataset and is fully
/// configured at construction, so checkers are independent of each other and
/// may run in any order.
///
/// Malformed cells are reported as issues. Only structural problems (a
/// required column missing from the schema, no rows at all) are returned as
/// `Err`, which aborts the whole run.
///
/// # Example
///
/// ```rust
/// use catalog_core::{DataSet, IssueRecord};
/// use catalog_validator::{RuleChecker, ValidationError, require_columns};
///
/// struct CategoryChecker;
///
/// impl RuleChecker for CategoryChecker {
///     fn name(&self) -> &str {
///         "CategoryChecker"
///     }
///
///     fn validate(&self, dataset: &DataSet) -> Result<Vec<IssueRecord>, ValidationError> {
///         require_columns(self.name(), dataset, &["sku", "category"])?;
///         Ok(dataset
///             .rows()
///             .filter(|row| row["category"].is_null())
///             .map(|row| IssueRecord::new(row["sku"].to_string(), "missing_category", "Category is empty"))
///             .collect())
///     }
/// }
/// ```
pub trait RuleChecker: Send + Sync {
    /// Name used in logs and in fatal error messages.
    fn name(&self) -> &str;

    /// Validates the dataset and returns the issues found, in row order.
    fn validate(&self, dataset: &DataSet) -> Result<Vec<IssueRecord>, ValidationError>;
}

/// Fails unless every column is in the schema and the dataset has rows.
pub fn require_columns(
    checker: &str,
    dataset: &DataSet,
    columns: &[&str],
) -> Result<(), ValidationError> {
    if let Some(missing) = columns.iter().find(|c| !dataset.has_column(c)) {
        return Err(ValidationError::missing_column(checker, *missing));
    }
    if dataset.is_empty() {
        return Err(ValidationError::empty_dataset(checker));
    }
    Ok(())
}

/// Raw identifier of a row. Missing keys render as the empty string.
pub fn row_identifier(row: &DataRow, key_column: &str) -> String {
    row.get(key_column).map(DataValue::to_string).unwrap_or_default()
}

/// Parses a cell as a finite number.
pub fn parse_number(value: &DataValue) -> Option<f64> {
    let number = match value {
        DataValue::Int(i) => *i as f64,
        DataValue::Float(f) => *f,
        DataValue::String(s) => s.trim().parse::<f64>().ok()?,
        DataValue::Null | DataValue::Bool(_) => return None,
    };
    number.is_finite().then_some(number)
}

/// Parses a cell as an integer.
///
/// Floats are accepted only when they carry no fractional part.
pub fn parse_integer(value: &DataValue) -> Option<i64> {
    match value {
        DataValue::Int(i) => Some(*i),
        DataValue::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(whole_number))
        }
        DataValue::Float(f) => whole_number(*f),
        DataValue::Null | DataValue::Bool(_) => None,
    }
}

fn whole_number(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::RowBuilder;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(&DataValue::from(" 12.5 ")), Some(12.5));
        assert_eq!(parse_number(&DataValue::Int(3)), Some(3.0));
        assert_eq!(parse_number(&DataValue::from("abc")), None);
        assert_eq!(parse_number(&DataValue::from("NaN")), None);
        assert_eq!(parse_number(&DataValue::from("inf")), None);
        assert_eq!(parse_number(&DataValue::Null), None);
        assert_eq!(parse_number(&DataValue::Bool(true)), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(&DataValue::from("-1")), Some(-1));
        assert_eq!(parse_integer(&DataValue::from("7.0")), Some(7));
        assert_eq!(parse_integer(&DataValue::Float(4.0)), Some(4));
        assert_eq!(parse_integer(&DataValue::from("4.5")), None);
        assert_eq!(parse_integer(&DataValue::Float(f64::NAN)), None);
        assert_eq!(parse_integer(&DataValue::from("")), None);
        assert_eq!(parse_integer(&DataValue::Null), None);
    }

    #[test]
    fn test_require_columns_reports_first_missing() {
        let dataset = DataSet::from_rows(vec![RowBuilder::new().value("sku", "A").build()]);

        let err = require_columns("PriceChecker", &dataset, &["sku", "price"]).unwrap_err();
        assert_eq!(err, ValidationError::missing_column("PriceChecker", "price"));
    }

    #[test]
    fn test_require_columns_rejects_empty_dataset() {
        let dataset = DataSet::with_columns(["sku"], Vec::new());

        let err = require_columns("IdentifierChecker", &dataset, &["sku"]).unwrap_err();
        assert_eq!(err, ValidationError::empty_dataset("IdentifierChecker"));
    }

    #[test]
    fn test_row_identifier_renders_raw_value() {
        let row = RowBuilder::new().value("sku", " sku-1").null("other").build();
        assert_eq!(row_identifier(&row, "sku"), " sku-1");
        assert_eq!(row_identifier(&row, "other"), "");
        assert_eq!(row_identifier(&row, "absent"), "");
    }
}
