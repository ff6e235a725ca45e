//! # sheetwrap-record
//!
//! Schema-driven marshaling between sheet rows and typed records.
//!
//! A record type implements [`SheetRecord`], declaring a [`RecordSchema`] that maps
//! each field to a column and a [`FieldType`]. Rows of raw cell text are read with
//! [`populate`] or a configured [`RecordMarshaler`], and written back as
//! [`CellData`](sheetwrap_core::CellData) with [`to_cell_value`] or [`record_to_cells`].

mod error;
mod marshal;
mod options;
mod raw;
mod record;
mod row;
mod schema;
mod value;

pub mod parse;
pub mod serial;

pub use error::{RecordError, RecordResult};
pub use marshal::{field_to_cell, populate, to_cell_value, RecordMarshaler};
pub use options::MarshalOptions;
pub use raw::RawCell;
pub use record::{RowRecord, SheetRecord};
pub use row::{header_cells, record_to_cells, string_row_to_cells};
pub use schema::{FieldSchema, FieldType, RecordSchema, RecordSchemaBuilder};
pub use value::FieldValue;
