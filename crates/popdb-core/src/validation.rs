use std::collections::BTreeSet;

use crate::error::{Error, Result};
use crate::schema::{ColumnType, TableDef};

/// Validate internal consistency of a table definition.
///
/// This checks:
/// - the table and its columns are named, with no duplicate columns
/// - exactly one primary key, and it is an integer
/// - string columns declare a positive maximum length
pub fn validate_table(table: &TableDef) -> Result<()> {
    if table.name.trim().is_empty() {
        return Err(Error::InvalidSchema("table name is empty".to_string()));
    }

    let mut names = BTreeSet::new();
    for column in &table.columns {
        if column.name.trim().is_empty() {
            return Err(Error::InvalidSchema(format!(
                "empty column name in table {}",
                table.name
            )));
        }
        if !names.insert(column.name.as_str()) {
            return Err(Error::InvalidSchema(format!(
                "duplicate column name: {}.{}",
                table.name, column.name
            )));
        }
        if column.column_type == ColumnType::Varchar(0) {
            return Err(Error::InvalidSchema(format!(
                "zero-length varchar column: {}.{}",
                table.name, column.name
            )));
        }
    }

    let keys: Vec<_> = table.columns.iter().filter(|c| c.primary_key).collect();
    match keys.as_slice() {
        [key] if key.column_type == ColumnType::Integer => Ok(()),
        [key] => Err(Error::Unsupported(format!(
            "non-integer primary key: {}.{}",
            table.name, key.name
        ))),
        [] => Err(Error::InvalidSchema(format!(
            "table {} has no primary key",
            table.name
        ))),
        _ => Err(Error::InvalidSchema(format!(
            "table {} has {} primary key columns",
            table.name,
            keys.len()
        ))),
    }
}
