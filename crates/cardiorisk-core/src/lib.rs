//! cardiorisk-core
//!
//! Pure domain types: the input snapshot, field identifiers and raw-text
//! parsing. No scoring logic; the other crates share this vocabulary.

pub mod error;
pub mod field;
pub mod snapshot;

pub use error::CoreError;
pub use field::{Field, FieldChange, FieldValue};
pub use snapshot::{Gender, InputSnapshot, Race};
