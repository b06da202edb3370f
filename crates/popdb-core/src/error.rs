use thiserror::Error;

/// Core error type shared across popdb crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The table definition violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// A requested feature is not supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

/// Convenience alias for results returned by popdb crates.
pub type Result<T> = std::result::Result<T, Error>;
