//! Record marshaling error types

use crate::schema::FieldType;
use thiserror::Error;

/// Result type for record operations
pub type RecordResult<T> = std::result::Result<T, RecordError>;

/// Errors that can occur while marshaling records
#[derive(Debug, Error)]
pub enum RecordError {
    /// A non-empty cell could not be converted to the field's type
    #[error("Cannot parse '{value}' in column {column_id} as {field_type}: {message}")]
    FieldParse {
        column_id: u32,
        field_type: FieldType,
        value: String,
        message: String,
    },

    /// Field type name is not one of the supported types
    #[error("Unsupported field type '{0}'")]
    UnsupportedFieldType(String),

    /// Row has no cell for a field (strict mode only)
    #[error("Row has no cell for column {column_id} ('{display_name}')")]
    SchemaMismatch { column_id: u32, display_name: String },

    /// Header cell does not match the field's display name
    #[error("Header mismatch in column {column_id}: expected '{expected}', found '{actual}'")]
    HeaderMismatch {
        column_id: u32,
        expected: String,
        actual: String,
    },

    /// Record returned a value of the wrong kind for a field
    #[error("Column {column_id} holds {expected} values, got {actual}")]
    ValueTypeMismatch {
        column_id: u32,
        expected: FieldType,
        actual: &'static str,
    },

    /// Schema declaration is not usable
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetwrap_core::Error),
}
