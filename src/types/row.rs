use std::collections::HashMap;

use crate::error::{Result, SecureDbError};

/// Driver-agnostic raw result from a database query.
/// All values are converted to strings by the driver.
#[derive(Debug, Clone)]
pub struct RawQueryResult {
    /// Column names in order
    pub columns: Vec<String>,
    /// Rows, where each row is a vector of string values in column order
    pub rows: Vec<Vec<String>>,
}

impl RawQueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

/// A single row result from a query.
/// Values are stored as strings and accessed by column name.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: HashMap<String, String>,
}

impl Row {
    /// Creates a new Row from column names and values.
    pub(crate) fn new(columns: &[String], values: Vec<String>) -> Self {
        let values = columns
            .iter()
            .zip(values.into_iter())
            .map(|(col, val)| (col.clone(), val))
            .collect();
        Self { values }
    }

    /// Gets a value by column name.
    pub fn get(&self, column: &str) -> Result<&str> {
        self.values
            .get(column)
            .map(|s| s.as_str())
            .ok_or_else(|| SecureDbError::ColumnNotFound(column.to_string()))
    }

    /// Returns all column names in this row.
    pub fn columns(&self) -> Vec<&str> {
        self.values.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of columns in this row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if this row has no columns.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered record view of a single row.
///
/// Deliberately a distinct type from [`Row`]: the default mode of
/// `query_get_with_options` returns this view while `query_get` collapses to
/// the plain mapping, and call sites may depend on the difference.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub(crate) fn new(columns: &[String], values: Vec<String>) -> Self {
        let fields = columns
            .iter()
            .cloned()
            .zip(values.into_iter())
            .collect();
        Self { fields }
    }

    /// Gets a field value by name.
    pub fn field(&self, name: &str) -> Result<&str> {
        self.fields
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, val)| val.as_str())
            .ok_or_else(|| SecureDbError::ColumnNotFound(name.to_string()))
    }

    /// Iterates over fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(col, val)| (col.as_str(), val.as_str()))
    }

    /// Returns the number of fields in this record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if this record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Shaped result of a read statement. The variant is selected by the
/// operation and its options, never inferred by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum Fetched {
    /// No matching rows.
    Empty,
    /// Exactly one matching row, as a plain mapping (`query_get` collapse).
    One(Row),
    /// Exactly one matching row, as a record view (default option mode).
    Record(Record),
    /// Rows in driver order; under the `list` option this is returned even
    /// for zero or one rows.
    Many(Vec<Row>),
    /// Number of matching rows, with no row data.
    Count(u64),
}

impl Fetched {
    /// True when the result carries no row data: `Empty`, an empty `Many`,
    /// or a zero `Count`.
    pub fn is_empty(&self) -> bool {
        match self {
            Fetched::Empty => true,
            Fetched::Many(rows) => rows.is_empty(),
            Fetched::Count(n) => *n == 0,
            Fetched::One(_) | Fetched::Record(_) => false,
        }
    }

    /// Flattens into a vector of rows: zero for `Empty`, one for `One`, all
    /// for `Many`. Returns `None` for `Record` and `Count`, which do not
    /// carry plain row mappings.
    pub fn into_rows(self) -> Option<Vec<Row>> {
        match self {
            Fetched::Empty => Some(Vec::new()),
            Fetched::One(row) => Some(vec![row]),
            Fetched::Many(rows) => Some(rows),
            Fetched::Record(_) | Fetched::Count(_) => None,
        }
    }
}
