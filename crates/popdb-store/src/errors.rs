use thiserror::Error;

/// Errors raised while writing to a target database.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error(transparent)]
    Core(#[from] popdb_core::Error),
}
