//! Field and record schemas
//!
//! A record type declares one [`FieldSchema`] per mapped field. The fields are collected
//! into a [`RecordSchema`], which keeps them ordered by column id.

use crate::error::{RecordError, RecordResult};
use crate::raw::RawCell;
use sheetwrap_core::{
    column_to_letters, NumberFormat, NumberFormatType, RangeAddress, MAX_THREE_LETTER_COLUMN,
};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Semantic type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldType {
    /// Free text
    String,
    /// Floating point number
    Number,
    /// Whole number
    Integer,
    /// Monetary amount
    Currency,
    /// US phone number stored as its digits
    PhoneNumber,
    /// Date and time stored as a date serial
    DateTime,
    /// TRUE/FALSE
    Boolean,
}

impl FieldType {
    /// All supported field types
    pub const ALL: [FieldType; 7] = [
        FieldType::String,
        FieldType::Number,
        FieldType::Integer,
        FieldType::Currency,
        FieldType::PhoneNumber,
        FieldType::DateTime,
        FieldType::Boolean,
    ];

    /// Get the name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "String",
            FieldType::Number => "Number",
            FieldType::Integer => "Integer",
            FieldType::Currency => "Currency",
            FieldType::PhoneNumber => "PhoneNumber",
            FieldType::DateTime => "DateTime",
            FieldType::Boolean => "Boolean",
        }
    }

    /// Format pattern used when a field does not override it
    pub fn default_format_pattern(&self) -> Option<&'static str> {
        match self {
            FieldType::String => None,
            FieldType::Number => Some("#,##0.00"),
            FieldType::Integer => Some("0"),
            FieldType::Currency => Some("$#,##0.00"),
            FieldType::PhoneNumber => Some("(###) ###-####"),
            FieldType::DateTime => Some("M/d/yyyy H:mm:ss"),
            FieldType::Boolean => Some("#"),
        }
    }

    /// Semantic type of the number format written for this field type
    ///
    /// Text and boolean cells are written without a number format.
    pub fn number_format_type(&self) -> Option<NumberFormatType> {
        match self {
            FieldType::Currency => Some(NumberFormatType::Currency),
            FieldType::Number
            | FieldType::Integer
            | FieldType::PhoneNumber
            | FieldType::DateTime => Some(NumberFormatType::Number),
            FieldType::String | FieldType::Boolean => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = RecordError;

    /// Parse a type name, ignoring ASCII case
    fn from_str(s: &str) -> RecordResult<Self> {
        FieldType::ALL
            .into_iter()
            .find(|field_type| field_type.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RecordError::UnsupportedFieldType(s.to_string()))
    }
}

/// Declarative description of one record field
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSchema {
    /// Header text of the field's column; must match the sheet exactly
    pub display_name: String,
    /// Column id (1-based, column A = 1)
    pub column_id: u32,
    /// Semantic type
    pub field_type: FieldType,
    /// Format pattern replacing the type's default
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub format_override: Option<String>,
}

impl FieldSchema {
    /// Create a field schema using the type's default format pattern
    pub fn new<S: Into<String>>(display_name: S, column_id: u32, field_type: FieldType) -> Self {
        Self {
            display_name: display_name.into(),
            column_id,
            field_type,
            format_override: None,
        }
    }

    /// Override the format pattern
    pub fn with_format_pattern<S: Into<String>>(mut self, pattern: S) -> Self {
        self.format_override = Some(pattern.into());
        self
    }

    /// Effective format pattern: the override, else the type's default
    pub fn format_pattern(&self) -> Option<&str> {
        self.format_override
            .as_deref()
            .or_else(|| self.field_type.default_format_pattern())
    }

    /// Number format written with this field's cells, if its type carries one
    pub fn number_format(&self) -> Option<NumberFormat> {
        let semantic_type = self.field_type.number_format_type()?;
        let pattern = self.format_pattern()?;
        Some(NumberFormat::new(pattern, semantic_type))
    }

    /// Column letters of the field (e.g., "C")
    pub fn column_letters(&self) -> String {
        column_to_letters(self.column_id)
    }
}

/// Ordered collection of a record type's fields
///
/// Fields are always kept in ascending column id order, so headers and rows generated
/// from the schema are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    /// Create a schema from field declarations
    ///
    /// Fails if no fields are declared, a column id is 0 or past column `ZZZ`, or two
    /// fields share a column id or display name.
    pub fn new(mut fields: Vec<FieldSchema>) -> RecordResult<Self> {
        if fields.is_empty() {
            return Err(RecordError::InvalidSchema("no fields declared".into()));
        }

        fields.sort_by_key(|field| field.column_id);

        let mut names = HashSet::new();
        for (index, field) in fields.iter().enumerate() {
            if field.column_id == 0 {
                return Err(RecordError::InvalidSchema(format!(
                    "field '{}' has column id 0; column ids start at 1",
                    field.display_name
                )));
            }
            if field.column_id > MAX_THREE_LETTER_COLUMN {
                return Err(RecordError::InvalidSchema(format!(
                    "field '{}' has column id {}; the last column is {}",
                    field.display_name, field.column_id, MAX_THREE_LETTER_COLUMN
                )));
            }
            if index > 0 && fields[index - 1].column_id == field.column_id {
                return Err(RecordError::InvalidSchema(format!(
                    "column {} is declared by both '{}' and '{}'",
                    field.column_id,
                    fields[index - 1].display_name,
                    field.display_name
                )));
            }
            if !names.insert(field.display_name.as_str()) {
                return Err(RecordError::InvalidSchema(format!(
                    "display name '{}' is declared twice",
                    field.display_name
                )));
            }
        }

        Ok(Self { fields })
    }

    /// Start building a schema field by field
    pub fn builder() -> RecordSchemaBuilder {
        RecordSchemaBuilder::default()
    }

    /// Fields in column order
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Iterate over fields in column order
    pub fn iter(&self) -> std::slice::Iter<'_, FieldSchema> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Always false; a schema declares at least one field
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field mapped to `column_id`
    pub fn field(&self, column_id: u32) -> Option<&FieldSchema> {
        self.fields
            .binary_search_by_key(&column_id, |field| field.column_id)
            .ok()
            .map(|index| &self.fields[index])
    }

    /// Field with the given display name
    pub fn field_by_name(&self, display_name: &str) -> Option<&FieldSchema> {
        self.fields
            .iter()
            .find(|field| field.display_name == display_name)
    }

    /// Column id of the field with the given display name
    pub fn column_id(&self, display_name: &str) -> Option<u32> {
        self.field_by_name(display_name).map(|field| field.column_id)
    }

    /// Smallest column id in the schema
    pub fn min_column_id(&self) -> u32 {
        self.fields[0].column_id
    }

    /// Largest column id in the schema
    pub fn max_column_id(&self) -> u32 {
        self.fields[self.fields.len() - 1].column_id
    }

    /// Display names in column order
    pub fn header_row(&self) -> Vec<&str> {
        self.fields
            .iter()
            .map(|field| field.display_name.as_str())
            .collect()
    }

    /// Check that a header row names every field exactly
    ///
    /// `min_column_id` is the column id of the first cell in `header`.
    pub fn validate_header<C: RawCell>(&self, header: &[C], min_column_id: u32) -> RecordResult<()> {
        for field in &self.fields {
            let actual = field
                .column_id
                .checked_sub(min_column_id)
                .and_then(|offset| header.get(offset as usize))
                .and_then(RawCell::raw)
                .unwrap_or("");

            if actual != field.display_name {
                return Err(RecordError::HeaderMismatch {
                    column_id: field.column_id,
                    expected: field.display_name.clone(),
                    actual: actual.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Range covering this schema's columns on sheet row `row_id`
    pub fn record_range<S: Into<String>>(&self, tab_name: S, row_id: u32) -> RangeAddress {
        RangeAddress::new(
            tab_name,
            self.min_column_id(),
            row_id,
            Some(self.max_column_id()),
            Some(row_id),
        )
    }
}

impl<'a> IntoIterator for &'a RecordSchema {
    type Item = &'a FieldSchema;
    type IntoIter = std::slice::Iter<'a, FieldSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Builder for [`RecordSchema`]
#[derive(Debug, Default)]
pub struct RecordSchemaBuilder {
    fields: Vec<FieldSchema>,
}

impl RecordSchemaBuilder {
    /// Add a field using its type's default format pattern
    pub fn field<S: Into<String>>(mut self, display_name: S, column_id: u32, field_type: FieldType) -> Self {
        self.fields
            .push(FieldSchema::new(display_name, column_id, field_type));
        self
    }

    /// Add a fully specified field
    pub fn with(mut self, field: FieldSchema) -> Self {
        self.fields.push(field);
        self
    }

    /// Validate and build the schema
    pub fn build(self) -> RecordResult<RecordSchema> {
        RecordSchema::new(self.fields)
    }
}
