use sqlx::{Postgres, QueryBuilder};

use popdb_core::{SqlValue, TableDef};

/// Multi-row `INSERT ... VALUES` with every value bound.
pub(super) fn insert_values<'args>(
    table: &TableDef,
    rows: &'args [Vec<SqlValue>],
) -> QueryBuilder<'args, Postgres> {
    let mut builder = QueryBuilder::new(table.insert_prefix());
    builder.push_values(rows, |mut values, row| {
        for value in row {
            match value {
                SqlValue::Null => {
                    values.push_bind(None::<String>);
                }
                SqlValue::Int(value) => {
                    values.push_bind(*value);
                }
                SqlValue::Text(value) => {
                    values.push_bind(value.as_str());
                }
            }
        }
    });
    builder
}

pub(super) fn count_rows(table: &TableDef) -> String {
    format!("SELECT COUNT(*) FROM {}", table.name)
}
