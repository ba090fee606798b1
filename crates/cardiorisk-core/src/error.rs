use thiserror::Error;

use crate::field::{Field, FieldValue};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("field '{}' does not accept {}", field.key(), value.kind())]
    FieldKind { field: Field, value: FieldValue },
}
