//! Number format types

use std::fmt;

/// Semantic type of a number format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "UPPERCASE")
)]
pub enum NumberFormatType {
    /// Plain number (also used for dates, phone numbers and integers)
    Number,
    /// Currency amount
    Currency,
}

impl NumberFormatType {
    /// Get the wire name of the type
    pub fn as_str(&self) -> &'static str {
        match self {
            NumberFormatType::Number => "NUMBER",
            NumberFormatType::Currency => "CURRENCY",
        }
    }
}

impl fmt::Display for NumberFormatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Number format applied when a cell is written
///
/// A cell without a number format is written as plain text or a plain boolean.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormat {
    /// Format pattern (e.g., `#,##0.00`)
    pub pattern: String,
    /// Semantic type of the pattern
    pub semantic_type: NumberFormatType,
}

impl NumberFormat {
    /// Create a number format
    pub fn new<S: Into<String>>(pattern: S, semantic_type: NumberFormatType) -> Self {
        Self {
            pattern: pattern.into(),
            semantic_type,
        }
    }

    /// Number format with the `NUMBER` type
    pub fn number<S: Into<String>>(pattern: S) -> Self {
        Self::new(pattern, NumberFormatType::Number)
    }

    /// Number format with the `CURRENCY` type
    pub fn currency<S: Into<String>>(pattern: S) -> Self {
        Self::new(pattern, NumberFormatType::Currency)
    }
}
