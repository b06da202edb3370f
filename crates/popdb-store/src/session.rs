use tracing::info;

use popdb_core::{Record, SqlValue, TableDef};

use crate::adapter::Adapter;
use crate::errors::StoreError;

/// Unit of work bound to one table of one database.
///
/// Records are staged in memory by [`Session::add`] and written together by
/// [`Session::commit`]. A failed commit stores nothing and keeps the stage.
pub struct Session<'a, A: Adapter + ?Sized> {
    adapter: &'a A,
    table: &'a TableDef,
    staged: Vec<Vec<SqlValue>>,
}

impl<'a, A: Adapter + ?Sized> Session<'a, A> {
    pub fn new(adapter: &'a A, table: &'a TableDef) -> Self {
        Self {
            adapter,
            table,
            staged: Vec::new(),
        }
    }

    pub fn table(&self) -> &TableDef {
        self.table
    }

    /// Stage `record` for insertion.
    pub fn add<R: Record>(&mut self, record: &R) -> Result<(), StoreError> {
        let row = record.row(self.table)?;
        self.staged.push(row);
        Ok(())
    }

    pub fn staged(&self) -> usize {
        self.staged.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Write every staged row in one transaction and clear the stage.
    pub async fn commit(&mut self) -> Result<u64, StoreError> {
        let inserted = self.adapter.insert_rows(self.table, &self.staged).await?;
        info!(
            event = "session_committed",
            engine = self.adapter.engine(),
            table = %self.table.name,
            rows = inserted
        );
        self.staged.clear();
        Ok(inserted)
    }
}
