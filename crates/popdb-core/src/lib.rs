//! Core contracts for popdb.
//!
//! This crate defines the table model, the `persons` table, connection-URI
//! helpers and the error type shared by the generator, store and CLI crates.

pub mod error;
pub mod persons;
pub mod redaction;
pub mod schema;
pub mod uri;
pub mod validation;
pub mod value;

pub use error::{Error, Result};
pub use persons::{PERSONS_TABLE, persons_table};
pub use redaction::{RedactedConnection, redact_connection_string};
pub use schema::{ColumnDef, ColumnType, TableDef};
pub use uri::{EnvKey, construct_db_uri, construct_db_uri_with};
pub use validation::validate_table;
pub use value::{Record, SqlValue};
