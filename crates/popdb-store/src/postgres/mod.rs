use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::{debug, info};

use popdb_core::{SqlValue, TableDef};

use crate::adapter::Adapter;
use crate::errors::StoreError;

mod statements;

/// Postgres caps a statement at 65535 bind parameters; 1000 rows of the
/// `persons` table stay well below it.
pub const MAX_ROWS_PER_STATEMENT: usize = 1000;

/// Adapter for PostgreSQL databases.
#[derive(Debug, Clone)]
pub struct PostgresAdapter {
    pool: PgPool,
}

impl PostgresAdapter {
    /// Create a new adapter using a pre-configured pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a single-connection pool to `uri`.
    pub async fn connect(uri: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(10))
            .connect(uri)
            .await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl Adapter for PostgresAdapter {
    fn engine(&self) -> &'static str {
        "postgres"
    }

    async fn reset_table(&self, table: &TableDef) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(&table.drop_table_sql())
            .execute(&mut *tx)
            .await?;
        sqlx::query(&table.create_table_sql())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        info!(event = "table_reset", table = %table.name);
        Ok(())
    }

    async fn insert_rows(
        &self,
        table: &TableDef,
        rows: &[Vec<SqlValue>],
    ) -> Result<u64, StoreError> {
        let width = table.insertable_columns().count();
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(StoreError::Core(popdb_core::Error::InvalidSchema(format!(
                "row has {} values but {} has {} insertable columns",
                row.len(),
                table.name,
                width
            ))));
        }

        let mut tx = self.pool.begin().await?;
        let mut inserted = 0_u64;

        for chunk in rows.chunks(MAX_ROWS_PER_STATEMENT) {
            let result = statements::insert_values(table, chunk)
                .build()
                .execute(&mut *tx)
                .await?;
            inserted += result.rows_affected();
            debug!(table = %table.name, rows = chunk.len(), "insert statement executed");
        }

        tx.commit().await?;
        Ok(inserted)
    }

    async fn count_rows(&self, table: &TableDef) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar(&statements::count_rows(table))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
