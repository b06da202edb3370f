use async_trait::async_trait;

use popdb_core::{SqlValue, TableDef};

use crate::errors::StoreError;

/// Trait implemented by database adapters that can own and fill a table.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Returns the engine identifier (e.g. `postgres`).
    fn engine(&self) -> &'static str;

    /// Drop `table` if it exists and create it again from its definition.
    async fn reset_table(&self, table: &TableDef) -> Result<(), StoreError>;

    /// Insert `rows` into the insertable columns of `table` atomically:
    /// either every row is stored or none is.
    async fn insert_rows(&self, table: &TableDef, rows: &[Vec<SqlValue>])
    -> Result<u64, StoreError>;

    /// Number of rows currently stored in `table`.
    async fn count_rows(&self, table: &TableDef) -> Result<i64, StoreError>;

    /// Release the connection; the adapter is not used afterwards.
    async fn close(&self) {}
}
