//! Prelude module - common imports for sheetwrap users
//!
//! ```rust
//! use sheetwrap::prelude::*;
//! ```

pub use crate::{
    // Cell types
    CellData,
    CellValue,
    // Column letters
    column_to_letters,
    letters_to_column,
    // Error types
    Error,
    // Record types
    FieldSchema,
    FieldType,
    FieldValue,
    MarshalOptions,
    NumberFormat,
    NumberFormatType,
    // Range types
    RangeAddress,
    RecordError,
    RecordMarshaler,
    RecordSchema,
    Result,
    RowRecord,
    SheetRecord,
};
