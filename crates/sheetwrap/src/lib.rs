//! # sheetwrap
//!
//! Typed records and range addressing for spreadsheet rows.
//!
//! sheetwrap maps rows of untyped cell text onto Rust records and back, and
//! converts between the letter (`Sheet1!B2:D10`) and numeric (`Sheet1!R2C2:R10C4`)
//! range notations.
//!
//! ## Features
//!
//! - Range parsing and formatting in both notations
//! - Bijective column letter conversion (`A` = 1, `AA` = 27)
//! - Declarative per-record field schemas with typed parsing
//! - Date serial conversion with millisecond precision
//! - Cell output carrying number format patterns
//! - Optional `serde` support for wire-facing types
//!
//! ## Example
//!
//! ```rust
//! use sheetwrap::prelude::*;
//!
//! let range: RangeAddress = "Sheet1!B2:D10".parse().unwrap();
//! assert_eq!(range.tab_name(), "Sheet1");
//! assert_eq!(range.start_column(), 2);
//! assert_eq!(range.numeric_notation(), "Sheet1!R2C2:R10C4");
//!
//! assert_eq!(column_to_letters(28), "AB");
//! ```

pub mod prelude;

// Re-export core types
pub use sheetwrap_core::{
    // Cell types
    CellData,
    CellValue,
    // Error types
    Error,
    NumberFormat,
    NumberFormatType,
    // Range types
    RangeAddress,
    RangeNotationParser,
    Result,
    // Column letters
    column_to_letters,
    letters_to_column,
    // Constants
    MAX_THREE_LETTER_COLUMN,
};

// Re-export record types
pub use sheetwrap_record::{
    field_to_cell, header_cells, populate, record_to_cells, string_row_to_cells,
    to_cell_value, FieldSchema, FieldType, FieldValue, MarshalOptions, RawCell,
    RecordError, RecordMarshaler, RecordResult, RecordSchema, RecordSchemaBuilder, RowRecord,
    SheetRecord,
};

/// Text parsing helpers for phone numbers, currency and booleans
pub use sheetwrap_record::parse;
/// Date serial conversion
pub use sheetwrap_record::serial;
