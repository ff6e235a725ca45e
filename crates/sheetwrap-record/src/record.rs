//! Record types

use crate::schema::{FieldSchema, RecordSchema};
use crate::value::FieldValue;

/// A type whose fields map onto sheet columns
///
/// Implementors declare their schema once (typically in a `Lazy` static) and map
/// between their fields and [`FieldValue`]s by column id.
///
/// ```
/// use once_cell::sync::Lazy;
/// use sheetwrap_record::{FieldSchema, FieldType, FieldValue, RecordSchema, SheetRecord};
///
/// #[derive(Default)]
/// struct Contact {
///     name: Option<String>,
///     phone: Option<i64>,
/// }
///
/// static CONTACT: Lazy<RecordSchema> = Lazy::new(|| {
///     RecordSchema::builder()
///         .field("Name", 1, FieldType::String)
///         .field("Phone", 2, FieldType::PhoneNumber)
///         .build()
///         .expect("valid contact schema")
/// });
///
/// impl SheetRecord for Contact {
///     fn schema() -> &'static RecordSchema {
///         &CONTACT
///     }
///
///     fn set_field(&mut self, field: &FieldSchema, value: FieldValue) {
///         match field.column_id {
///             1 => self.name = value.into_string(),
///             2 => self.phone = value.as_i64(),
///             _ => {}
///         }
///     }
///
///     fn field(&self, field: &FieldSchema) -> Option<FieldValue> {
///         match field.column_id {
///             1 => self.name.clone().map(FieldValue::String),
///             2 => self.phone.map(FieldValue::PhoneNumber),
///             _ => None,
///         }
///     }
/// }
///
/// let contact: Contact = sheetwrap_record::populate(&["Ann", "+1 (703) 111-2222"], 1).unwrap();
/// assert_eq!(contact.phone, Some(7031112222));
/// ```
pub trait SheetRecord: Default {
    /// The record type's field schema
    fn schema() -> &'static RecordSchema;

    /// Store a parsed value in the field described by `field`
    fn set_field(&mut self, field: &FieldSchema, value: FieldValue);

    /// Current value of the field described by `field`, `None` when unset
    fn field(&self, field: &FieldSchema) -> Option<FieldValue>;
}

/// A record read from a sheet, with the 1-based row it came from
#[derive(Debug, Clone, PartialEq)]
pub struct RowRecord<T> {
    /// Sheet row id (1-based)
    pub row_id: u32,
    /// The record
    pub record: T,
}

impl<T: SheetRecord> RowRecord<T> {
    /// Range covering this record's columns on its row
    pub fn range<S: Into<String>>(&self, tab_name: S) -> sheetwrap_core::RangeAddress {
        T::schema().record_range(tab_name, self.row_id)
    }
}
