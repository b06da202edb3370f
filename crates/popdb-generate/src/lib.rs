//! Synthetic `persons` records for popdb.
//!
//! Records are built from an injected RNG so runs can be reproduced with a
//! seed; every string is cut to the length its column declares.

pub mod errors;
pub mod generators;
pub mod model;
pub mod text;

pub use errors::GenerationError;
pub use generators::{PersonGenerator, seeded_rng};
pub use model::{EducationLevel, Gender, MaritalStatus, Person, UNHASHED};
pub use text::truncate;
