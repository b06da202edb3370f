use thiserror::Error;

/// Errors emitted while preparing record generation.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    #[error(transparent)]
    Core(#[from] popdb_core::Error),
}
