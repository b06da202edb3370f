//! Database adapters and the unit-of-work used to populate tables.

pub mod adapter;
pub mod errors;
pub mod populate;
pub mod postgres;
pub mod session;

pub use adapter::Adapter;
pub use errors::StoreError;
pub use populate::{DEFAULT_ROW_COUNT, populate};
pub use postgres::PostgresAdapter;
pub use session::Session;
