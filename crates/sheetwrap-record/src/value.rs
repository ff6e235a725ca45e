//! Typed field values

use crate::schema::FieldType;
use chrono::NaiveDateTime;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::fmt;

/// A typed value read from, or written to, one record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text
    String(String),
    /// Floating point number
    Number(f64),
    /// Whole number
    Integer(i64),
    /// Monetary amount
    Currency(Decimal),
    /// Phone number digits without the country code
    PhoneNumber(i64),
    /// Calendar date and time
    DateTime(NaiveDateTime),
    /// Boolean
    Boolean(bool),
}

impl FieldValue {
    /// Field type this value naturally belongs to
    pub fn field_type(&self) -> FieldType {
        match self {
            FieldValue::String(_) => FieldType::String,
            FieldValue::Number(_) => FieldType::Number,
            FieldValue::Integer(_) => FieldType::Integer,
            FieldValue::Currency(_) => FieldType::Currency,
            FieldValue::PhoneNumber(_) => FieldType::PhoneNumber,
            FieldValue::DateTime(_) => FieldType::DateTime,
            FieldValue::Boolean(_) => FieldType::Boolean,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::Integer(_) => "integer",
            FieldValue::Currency(_) => "currency",
            FieldValue::PhoneNumber(_) => "phone number",
            FieldValue::DateTime(_) => "date-time",
            FieldValue::Boolean(_) => "boolean",
        }
    }

    /// Borrow the text of a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Take the text of a string value
    pub fn into_string(self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value of any numeric variant
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Integer(n) | FieldValue::PhoneNumber(n) => Some(*n as f64),
            FieldValue::Currency(d) => d.to_f64(),
            _ => None,
        }
    }

    /// Whole number value of an integer or phone number
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) | FieldValue::PhoneNumber(n) => Some(*n),
            _ => None,
        }
    }

    /// Decimal value of a currency, integer or finite number
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            FieldValue::Currency(d) => Some(*d),
            FieldValue::Integer(n) => Some(Decimal::from(*n)),
            FieldValue::Number(n) => Decimal::from_f64(*n),
            _ => None,
        }
    }

    /// Date-time value
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => f.write_str(s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Integer(n) | FieldValue::PhoneNumber(n) => write!(f, "{}", n),
            FieldValue::Currency(d) => write!(f, "{}", d),
            FieldValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            FieldValue::Boolean(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<Decimal> for FieldValue {
    fn from(d: Decimal) -> Self {
        FieldValue::Currency(d)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(dt: NaiveDateTime) -> Self {
        FieldValue::DateTime(dt)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Boolean(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    #[test]
    fn test_numeric_accessors() {
        let price = FieldValue::from(Decimal::from_str("12.50").unwrap());
        assert_eq!(price.as_f64(), Some(12.5));
        assert_eq!(price.field_type(), FieldType::Currency);

        let phone = FieldValue::PhoneNumber(7031112222);
        assert_eq!(phone.as_i64(), Some(7031112222));
        assert_eq!(phone.as_f64(), Some(7031112222.0));
        assert_eq!(phone.as_decimal(), None);

        assert_eq!(FieldValue::from(3i64).as_decimal(), Some(Decimal::from(3)));
        assert_eq!(FieldValue::from("x").as_f64(), None);
    }

    #[test]
    fn test_display() {
        let dt = NaiveDate::from_ymd_opt(2024, 2, 29)
            .unwrap()
            .and_hms_opt(13, 5, 0)
            .unwrap();
        assert_eq!(FieldValue::from(dt).to_string(), "2024-02-29 13:05:00");
        assert_eq!(FieldValue::from(true).to_string(), "TRUE");
        assert_eq!(FieldValue::from("Ann").to_string(), "Ann");
        assert_eq!(FieldValue::PhoneNumber(7031112222).to_string(), "7031112222");
    }
}
