use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::schema::TableDef;

/// A scalar bound into an insert statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SqlValue {
    Null,
    Int(i32),
    Text(String),
}

impl SqlValue {
    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            SqlValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<i32> for SqlValue {
    fn from(value: i32) -> Self {
        SqlValue::Int(value)
    }
}

impl From<String> for SqlValue {
    fn from(value: String) -> Self {
        SqlValue::Text(value)
    }
}

impl From<&str> for SqlValue {
    fn from(value: &str) -> Self {
        SqlValue::Text(value.to_string())
    }
}

/// A value that can be stored as one row of a table.
pub trait Record {
    /// Value for `column`, `None` when the record has no such column.
    fn value(&self, column: &str) -> Option<SqlValue>;

    /// Values for the insertable columns of `table`, in column order.
    fn row(&self, table: &TableDef) -> Result<Vec<SqlValue>> {
        table
            .insertable_columns()
            .map(|column| {
                self.value(&column.name).ok_or_else(|| {
                    Error::InvalidSchema(format!(
                        "record has no value for column {}.{}",
                        table.name, column.name
                    ))
                })
            })
            .collect()
    }
}
