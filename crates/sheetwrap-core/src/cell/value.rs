//! Cell value types

use super::format::NumberFormat;
use std::fmt;

/// Represents the value written to a cell
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValue {
    /// No value (the cell is left blank)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "emptyValue"))]
    Empty,

    /// Boolean value (TRUE/FALSE)
    #[cfg_attr(feature = "serde", serde(rename = "boolValue"))]
    Boolean(bool),

    /// Numeric value (amounts, integers, phone numbers and date serials)
    #[cfg_attr(feature = "serde", serde(rename = "numberValue"))]
    Number(f64),

    /// String value
    #[cfg_attr(feature = "serde", serde(rename = "stringValue"))]
    String(String),
}

impl CellValue {
    /// Create a new string value
    pub fn string<S: Into<String>>(s: S) -> Self {
        CellValue::String(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get the value as a string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            CellValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Boolean(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::String(_) => "string",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Boolean(b)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::string(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::String(s)
    }
}

/// A cell value with the number format to apply when it is written
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellData {
    /// The value to write
    pub value: CellValue,
    /// Number format; `None` writes the value without numeric formatting
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub number_format: Option<NumberFormat>,
}

impl CellData {
    /// Create cell data without a number format
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            number_format: None,
        }
    }

    /// Create a plain text cell
    pub fn text<S: Into<String>>(s: S) -> Self {
        Self::new(CellValue::String(s.into()))
    }

    /// Create cell data with a number format
    pub fn formatted<V: Into<CellValue>>(value: V, number_format: NumberFormat) -> Self {
        Self {
            value: value.into(),
            number_format: Some(number_format),
        }
    }

    /// Check if a number format is attached
    pub fn has_number_format(&self) -> bool {
        self.number_format.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::NumberFormatType;

    #[test]
    fn test_accessors() {
        assert_eq!(CellValue::from(2.5).as_number(), Some(2.5));
        assert_eq!(CellValue::from(7i64).as_number(), Some(7.0));
        assert_eq!(CellValue::from(true).as_bool(), Some(true));
        assert_eq!(CellValue::from("abc").as_string(), Some("abc"));
        assert_eq!(CellValue::from("abc").as_number(), None);
        assert!(CellValue::default().is_empty());
        assert_eq!(CellValue::Empty.type_name(), "empty");
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Boolean(false).to_string(), "FALSE");
        assert_eq!(CellValue::Number(1.5).to_string(), "1.5");
        assert_eq!(CellValue::Empty.to_string(), "");
    }

    #[test]
    fn test_cell_data_constructors() {
        let cell = CellData::text("Name");
        assert_eq!(cell.value.as_string(), Some("Name"));
        assert!(!cell.has_number_format());

        let cell = CellData::formatted(12.5, NumberFormat::currency("$#,##0.00"));
        let format = cell.number_format.as_ref().unwrap();
        assert_eq!(format.semantic_type, NumberFormatType::Currency);
        assert_eq!(cell.value, CellValue::Number(12.5));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_shape() {
        let cell = CellData::formatted(3.0, NumberFormat::number("0"));
        let json = serde_json::to_value(&cell).unwrap();
        assert_eq!(json["value"]["numberValue"], 3.0);
        assert_eq!(json["number_format"]["semantic_type"], "NUMBER");

        let json = serde_json::to_value(CellData::text("x")).unwrap();
        assert!(json.get("number_format").is_none());
    }
}
