//! Conversion between raw rows and records
//!
//! Reading walks the record's schema in column order. For each field:
//! - a row that is too short for the field leaves it unset (or fails in strict mode)
//! - an empty cell leaves it unset
//! - anything else must parse as the field's type or the whole row fails

use crate::error::{RecordError, RecordResult};
use crate::options::MarshalOptions;
use crate::parse::{
    parse_boolean, parse_currency_string, remove_group_separators,
    remove_us_international_phone_code,
};
use crate::raw::RawCell;
use crate::record::{RowRecord, SheetRecord};
use crate::schema::{FieldSchema, FieldType};
use crate::serial::{datetime_to_serial, serial_to_datetime};
use crate::value::FieldValue;
use sheetwrap_core::{CellData, CellValue};

/// Reads rows into records and writes records back to cells
#[derive(Debug, Clone, Default)]
pub struct RecordMarshaler {
    options: MarshalOptions,
}

impl RecordMarshaler {
    /// Create a marshaler with the given options
    pub fn new(options: MarshalOptions) -> Self {
        Self { options }
    }

    /// Options in effect
    pub fn options(&self) -> &MarshalOptions {
        &self.options
    }

    /// Read one row into a new record
    pub fn populate<T: SheetRecord, C: RawCell>(&self, row: &[C]) -> RecordResult<T> {
        let mut record = T::default();
        self.populate_into(&mut record, row)?;
        Ok(record)
    }

    /// Read one row into an existing record, leaving fields without a value untouched
    pub fn populate_into<T: SheetRecord, C: RawCell>(
        &self,
        record: &mut T,
        row: &[C],
    ) -> RecordResult<()> {
        for field in T::schema() {
            let Some(offset) = field.column_id.checked_sub(self.options.min_column_id) else {
                tracing::trace!(
                    column_id = field.column_id,
                    min_column_id = self.options.min_column_id,
                    "field lies before the first column of the row"
                );
                continue;
            };

            let raw = match row.get(offset as usize) {
                Some(cell) => cell.raw().unwrap_or(""),
                None if self.options.strict => {
                    return Err(RecordError::SchemaMismatch {
                        column_id: field.column_id,
                        display_name: field.display_name.clone(),
                    });
                }
                None => {
                    tracing::debug!(
                        column_id = field.column_id,
                        field = %field.display_name,
                        "row has no cell for field, leaving it unset"
                    );
                    continue;
                }
            };

            if let Some(value) = self.parse_field(field, raw)? {
                record.set_field(field, value);
            }
        }
        Ok(())
    }

    /// Read consecutive rows, the first of which sits on sheet row `first_row_id`
    pub fn read_rows<T, R, C>(&self, rows: &[R], first_row_id: u32) -> RecordResult<Vec<RowRecord<T>>>
    where
        T: SheetRecord,
        R: AsRef<[C]>,
        C: RawCell,
    {
        let mut records = Vec::with_capacity(rows.len());
        for (row_id, row) in (first_row_id..).zip(rows) {
            let record = self.populate(row.as_ref())?;
            records.push(RowRecord { row_id, record });
        }
        tracing::debug!(count = records.len(), first_row_id, "read records");
        Ok(records)
    }

    /// Parse one raw cell according to its field's type
    ///
    /// Returns `Ok(None)` when the cell is empty.
    pub fn parse_field(&self, field: &FieldSchema, raw: &str) -> RecordResult<Option<FieldValue>> {
        if field.field_type == FieldType::String {
            if raw.is_empty() {
                return Ok(None);
            }
            return Ok(Some(FieldValue::String(raw.to_string())));
        }

        let text = if self.options.trim_whitespace {
            raw.trim()
        } else {
            raw
        };
        if text.is_empty() {
            return Ok(None);
        }

        let fail = |message: String| RecordError::FieldParse {
            column_id: field.column_id,
            field_type: field.field_type,
            value: raw.to_string(),
            message,
        };

        let value = match field.field_type {
            FieldType::String => FieldValue::String(text.to_string()),
            FieldType::Currency => parse_currency_string(text)
                .map(FieldValue::Currency)
                .map_err(|e| fail(e.to_string()))?,
            FieldType::PhoneNumber => {
                let digits = remove_us_international_phone_code(text);
                if digits.is_empty() {
                    return Err(fail("no digits in phone number".into()));
                }
                digits
                    .parse::<i64>()
                    .map(FieldValue::PhoneNumber)
                    .map_err(|e| fail(e.to_string()))?
            }
            FieldType::DateTime => {
                let serial = text.parse::<f64>().map_err(|e| fail(e.to_string()))?;
                serial_to_datetime(serial)
                    .map(FieldValue::DateTime)
                    .ok_or_else(|| fail("date serial out of range".into()))?
            }
            FieldType::Number => remove_group_separators(text)
                .parse::<f64>()
                .map(FieldValue::Number)
                .map_err(|e| fail(e.to_string()))?,
            FieldType::Integer => remove_group_separators(text)
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|e| fail(e.to_string()))?,
            FieldType::Boolean => parse_boolean(text)
                .map(FieldValue::Boolean)
                .ok_or_else(|| fail("expected a true/false value".into()))?,
        };

        tracing::trace!(column_id = field.column_id, raw, "parsed field");
        Ok(Some(value))
    }
}

/// Read one row into a new record using default options and the given first column id
pub fn populate<T: SheetRecord, C: RawCell>(row: &[C], min_column_id: u32) -> RecordResult<T> {
    RecordMarshaler::new(MarshalOptions::starting_at(min_column_id)).populate(row)
}

/// Convert one field of a record to cell data
pub fn to_cell_value<T: SheetRecord>(record: &T, field: &FieldSchema) -> RecordResult<CellData> {
    field_to_cell(field, record.field(field))
}

/// Convert a field value to cell data, attaching the field's number format
///
/// A phone number of exactly zero is written as an empty numeric cell.
pub fn field_to_cell(field: &FieldSchema, value: Option<FieldValue>) -> RecordResult<CellData> {
    let mismatch = |value: &FieldValue| RecordError::ValueTypeMismatch {
        column_id: field.column_id,
        expected: field.field_type,
        actual: value.type_name(),
    };

    let value = match field.field_type {
        FieldType::String => {
            let text = value.map(|value| value.to_string()).unwrap_or_default();
            if text.trim().is_empty() {
                CellValue::string("")
            } else {
                CellValue::String(text)
            }
        }
        FieldType::Currency | FieldType::Number | FieldType::Integer => match value {
            Some(value) => CellValue::Number(value.as_f64().ok_or_else(|| mismatch(&value))?),
            None => CellValue::Empty,
        },
        FieldType::PhoneNumber => match value {
            Some(value) => {
                let number = value.as_f64().ok_or_else(|| mismatch(&value))?;
                if number == 0.0 {
                    CellValue::Empty
                } else {
                    CellValue::Number(number)
                }
            }
            None => CellValue::Empty,
        },
        FieldType::DateTime => match value {
            Some(value) => {
                let datetime = value.as_datetime().ok_or_else(|| mismatch(&value))?;
                CellValue::Number(datetime_to_serial(&datetime))
            }
            None => CellValue::Empty,
        },
        FieldType::Boolean => match value {
            Some(value) => CellValue::Boolean(value.as_bool().ok_or_else(|| mismatch(&value))?),
            None => CellValue::Empty,
        },
    };

    Ok(CellData {
        value,
        number_format: field.number_format(),
    })
}
