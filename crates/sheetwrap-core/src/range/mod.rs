//! Range addressing
//!
//! This module contains:
//! - [`RangeAddress`] - A region on a tab, with letter and numeric renderings
//! - [`RangeNotationParser`] - Grammar recognizers and parsers for both renderings
//! - [`column_to_letters`] / [`letters_to_column`] - Column letter conversion

mod column;
mod notation;

pub use column::{column_to_letters, letters_to_column};
pub use notation::RangeNotationParser;

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A range on a sheet tab (e.g., "Sheet1!B2:D10" or "Sheet1!R2C2:R10C4")
///
/// Rows and columns are 1-based. The end coordinates are optional; without them the
/// range addresses a single cell. Both textual renderings are computed on construction
/// and never change afterwards.
///
/// Inverted ranges (end before start) are accepted as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RangeCoordinates", into = "RangeCoordinates")
)]
pub struct RangeAddress {
    tab_name: String,
    start_column: u32,
    start_row: u32,
    end_column: Option<u32>,
    end_row: Option<u32>,
    letter_notation: Option<String>,
    numeric_notation: String,
}

impl RangeAddress {
    /// Create a range from 1-based coordinates
    ///
    /// The letter rendering is only available when `end_column` is given.
    pub fn new<S: Into<String>>(
        tab_name: S,
        start_column: u32,
        start_row: u32,
        end_column: Option<u32>,
        end_row: Option<u32>,
    ) -> Self {
        let tab_name = tab_name.into();

        let numeric = match (end_row, end_column) {
            (Some(end_row), Some(end_column)) => format!(
                "R{}C{}:R{}C{}",
                start_row, start_column, end_row, end_column
            ),
            _ => format!("R{}C{}", start_row, start_column),
        };

        let letter = end_column.map(|end_column| {
            let end_row = end_row.map(|row| row.to_string()).unwrap_or_default();
            format!(
                "{}{}:{}{}",
                column_to_letters(start_column),
                start_row,
                column_to_letters(end_column),
                end_row
            )
        });

        Self {
            numeric_notation: with_tab(&tab_name, numeric),
            letter_notation: letter.map(|letter| with_tab(&tab_name, letter)),
            tab_name,
            start_column,
            start_row,
            end_column,
            end_row,
        }
    }

    /// Create a single-cell range
    pub fn cell<S: Into<String>>(tab_name: S, column: u32, row: u32) -> Self {
        Self::new(tab_name, column, row, None, None)
    }

    /// Parse a range in either notation, numeric form first
    pub fn parse(range: &str) -> Result<Self> {
        RangeNotationParser::parse(range)
    }

    /// Tab name, empty when the range carries no tab prefix
    pub fn tab_name(&self) -> &str {
        &self.tab_name
    }

    /// First column (1-based)
    pub fn start_column(&self) -> u32 {
        self.start_column
    }

    /// First row (1-based)
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// Last column (1-based), if bounded
    pub fn end_column(&self) -> Option<u32> {
        self.end_column
    }

    /// Last row (1-based), if bounded
    pub fn end_row(&self) -> Option<u32> {
        self.end_row
    }

    /// True when no end row is present
    pub fn is_single_cell(&self) -> bool {
        self.end_row.is_none()
    }

    /// True when the range can be written in letter notation
    pub fn supports_letter_notation(&self) -> bool {
        self.end_column.is_some()
    }

    /// Letter rendering (`Sheet1!B2:D10`), absent without an end column
    pub fn letter_notation(&self) -> Option<&str> {
        self.letter_notation.as_deref()
    }

    /// Numeric rendering (`Sheet1!R2C2:R10C4`)
    pub fn numeric_notation(&self) -> &str {
        &self.numeric_notation
    }
}

fn with_tab(tab_name: &str, cells: String) -> String {
    if tab_name.is_empty() {
        cells
    } else {
        format!("{}!{}", tab_name, cells)
    }
}

impl fmt::Display for RangeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.numeric_notation)
    }
}

impl FromStr for RangeAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for RangeAddress {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl TryFrom<String> for RangeAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RangeAddress> for String {
    fn from(range: RangeAddress) -> Self {
        range.numeric_notation
    }
}

/// Serialized form of a range: the coordinates, renderings are rebuilt on load
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RangeCoordinates {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    tab_name: String,
    start_column: u32,
    start_row: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_column: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_row: Option<u32>,
}

#[cfg(feature = "serde")]
impl From<RangeAddress> for RangeCoordinates {
    fn from(range: RangeAddress) -> Self {
        Self {
            tab_name: range.tab_name,
            start_column: range.start_column,
            start_row: range.start_row,
            end_column: range.end_column,
            end_row: range.end_row,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RangeCoordinates> for RangeAddress {
    fn from(coordinates: RangeCoordinates) -> Self {
        RangeAddress::new(
            coordinates.tab_name,
            coordinates.start_column,
            coordinates.start_row,
            coordinates.end_column,
            coordinates.end_row,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_renders_both_notations() {
        let range = RangeAddress::new("Sheet1", 2, 2, Some(4), Some(10));
        assert_eq!(range.letter_notation(), Some("Sheet1!B2:D10"));
        assert_eq!(range.numeric_notation(), "Sheet1!R2C2:R10C4");
        assert!(!range.is_single_cell());
        assert!(range.supports_letter_notation());
    }

    #[test]
    fn test_new_without_tab() {
        let range = RangeAddress::new("", 1, 1, Some(28), Some(3));
        assert_eq!(range.letter_notation(), Some("A1:AB3"));
        assert_eq!(range.numeric_notation(), "R1C1:R3C28");
    }

    #[test]
    fn test_parse_letter_range() {
        let range = RangeAddress::parse("Sheet1!B2:D10").unwrap();
        assert_eq!(range.tab_name(), "Sheet1");
        assert_eq!(range.start_column(), 2);
        assert_eq!(range.start_row(), 2);
        assert_eq!(range.end_column(), Some(4));
        assert_eq!(range.end_row(), Some(10));
        assert_eq!(range.numeric_notation(), "Sheet1!R2C2:R10C4");
    }

    #[test]
    fn test_parse_numeric_single_cell() {
        let range: RangeAddress = "R5C3".parse().unwrap();
        assert_eq!(range.tab_name(), "");
        assert_eq!(range.start_row(), 5);
        assert_eq!(range.start_column(), 3);
        assert_eq!(range.end_row(), None);
        assert_eq!(range.end_column(), None);
        assert!(range.is_single_cell());
        assert!(!range.supports_letter_notation());
        assert_eq!(range.letter_notation(), None);
        assert_eq!(range.numeric_notation(), "R5C3");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        let err = RangeAddress::parse("not a range").unwrap_err();
        assert!(matches!(err, Error::InvalidRangeFormat { .. }));
        assert!(err.to_string().contains("not a range"));
    }

    #[test]
    fn test_inverted_range_is_kept() {
        let range = RangeAddress::new("t", 5, 9, Some(2), Some(3));
        assert_eq!(range.start_column(), 5);
        assert_eq!(range.end_column(), Some(2));
        assert_eq!(range.letter_notation(), Some("t!E9:B3"));
    }

    #[test]
    fn test_column_only_end() {
        let range = RangeAddress::new("Data", 1, 2, Some(5), None);
        assert!(range.is_single_cell());
        assert!(range.supports_letter_notation());
        assert_eq!(range.letter_notation(), Some("Data!A2:E"));
        assert_eq!(range.numeric_notation(), "Data!R2C1");
    }

    #[test]
    fn test_equality_is_structural() {
        let parsed = RangeAddress::parse("Sheet1!R2C2:R10C4").unwrap();
        let built = RangeAddress::new("Sheet1", 2, 2, Some(4), Some(10));
        assert_eq!(parsed, built);
        assert_ne!(built, RangeAddress::new("Sheet2", 2, 2, Some(4), Some(10)));
        assert_ne!(built, RangeAddress::new("Sheet1", 2, 2, Some(4), Some(11)));
    }

    #[test]
    fn test_display_is_numeric_notation() {
        let range = RangeAddress::cell("Sheet1", 3, 4);
        assert_eq!(range.to_string(), "Sheet1!R4C3");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_coordinates() {
        let range = RangeAddress::new("Sheet1", 2, 2, Some(4), Some(10));
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "tabName": "Sheet1",
                "startColumn": 2,
                "startRow": 2,
                "endColumn": 4,
                "endRow": 10,
            })
        );
        let back: RangeAddress = serde_json::from_value(json).unwrap();
        assert_eq!(back, range);
        assert_eq!(back.letter_notation(), Some("Sheet1!B2:D10"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_partial_ends() {
        let ranges = [
            RangeAddress::new("Data", 1, 2, Some(5), None),
            RangeAddress::new("Data", 1, 2, None, Some(9)),
            RangeAddress::cell("", 3, 4),
        ];
        for range in ranges {
            let json = serde_json::to_string(&range).unwrap();
            let back: RangeAddress = serde_json::from_str(&json).unwrap();
            assert_eq!(back, range);
        }

        let column_only = RangeAddress::new("Data", 1, 2, Some(5), None);
        let json = serde_json::to_value(&column_only).unwrap();
        assert_eq!(json["endColumn"], 5);
        assert!(json.get("endRow").is_none());
    }
}
