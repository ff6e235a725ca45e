//! Range notation grammars
//!
//! Two textual forms are recognized, both with an optional `<tab>!` prefix:
//! - letter form: `B2`, `Sheet1!B2:D10`
//! - numeric form: `R2C2`, `Sheet1!R2C2:R10C4`

use super::column::letters_to_column;
use super::RangeAddress;
use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static LETTER_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]+)([1-9][0-9]*)(?::([A-Za-z]+)([1-9][0-9]*))?$")
        .expect("hardcoded letter notation pattern")
});

static NUMERIC_NOTATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[Rr]([1-9][0-9]*)[Cc]([1-9][0-9]*)(?::[Rr]([1-9][0-9]*)[Cc]([1-9][0-9]*))?$")
        .expect("hardcoded numeric notation pattern")
});

/// Recognizer and parser for range strings
pub struct RangeNotationParser;

impl RangeNotationParser {
    /// Check whether `range` is a letter-form range (`Sheet1!A1:C3`)
    pub fn is_valid_letter_notation(range: &str) -> bool {
        let (_, cells) = split_tab(range);
        LETTER_NOTATION.is_match(cells)
    }

    /// Check whether `range` is a numeric-form range (`Sheet1!R1C1:R3C3`)
    pub fn is_valid_numeric_notation(range: &str) -> bool {
        let (_, cells) = split_tab(range);
        NUMERIC_NOTATION.is_match(cells)
    }

    /// Parse a letter-form range
    ///
    /// # Examples
    /// ```
    /// use sheetwrap_core::RangeNotationParser;
    ///
    /// let range = RangeNotationParser::parse_letter_notation("Data!b2:AA10").unwrap();
    /// assert_eq!(range.tab_name(), "Data");
    /// assert_eq!(range.start_column(), 2);
    /// assert_eq!(range.end_column(), Some(27));
    /// ```
    pub fn parse_letter_notation(range: &str) -> Result<RangeAddress> {
        let (tab, cells) = split_tab(range);
        let captures = LETTER_NOTATION
            .captures(cells)
            .ok_or_else(|| Error::invalid_range(range, "expected letter notation like 'A1:B2'"))?;

        let start_column = column_group(range, &captures, 1)?;
        let start_row = number_group(range, &captures, 2)?;
        let (end_column, end_row) = if captures.get(3).is_some() {
            (
                Some(column_group(range, &captures, 3)?),
                Some(number_group(range, &captures, 4)?),
            )
        } else {
            (None, None)
        };

        tracing::trace!(range, "parsed letter notation");
        Ok(RangeAddress::new(
            tab,
            start_column,
            start_row,
            end_column,
            end_row,
        ))
    }

    /// Parse a numeric-form range
    pub fn parse_numeric_notation(range: &str) -> Result<RangeAddress> {
        let (tab, cells) = split_tab(range);
        let captures = NUMERIC_NOTATION
            .captures(cells)
            .ok_or_else(|| Error::invalid_range(range, "expected numeric notation like 'R1C1:R2C2'"))?;

        let start_row = number_group(range, &captures, 1)?;
        let start_column = number_group(range, &captures, 2)?;
        let (end_column, end_row) = if captures.get(3).is_some() {
            (
                Some(number_group(range, &captures, 4)?),
                Some(number_group(range, &captures, 3)?),
            )
        } else {
            (None, None)
        };

        tracing::trace!(range, "parsed numeric notation");
        Ok(RangeAddress::new(
            tab,
            start_column,
            start_row,
            end_column,
            end_row,
        ))
    }

    /// Parse either form, trying the numeric grammar first
    pub fn parse(range: &str) -> Result<RangeAddress> {
        if Self::is_valid_numeric_notation(range) {
            Self::parse_numeric_notation(range)
        } else if Self::is_valid_letter_notation(range) {
            Self::parse_letter_notation(range)
        } else {
            Err(Error::invalid_range(
                range,
                "not a letter or numeric range notation",
            ))
        }
    }
}

/// Split off the tab prefix at the last `!`
fn split_tab(range: &str) -> (&str, &str) {
    range.rsplit_once('!').unwrap_or(("", range))
}

fn number_group(range: &str, captures: &Captures<'_>, index: usize) -> Result<u32> {
    let text = captures.get(index).map_or("", |m| m.as_str());
    text.parse()
        .map_err(|_| Error::invalid_range(range, format!("'{}' is out of range", text)))
}

fn column_group(range: &str, captures: &Captures<'_>, index: usize) -> Result<u32> {
    let letters = captures.get(index).map_or("", |m| m.as_str());
    letters_to_column(letters).map_err(|_| {
        Error::invalid_range(range, format!("column '{}' is out of range", letters))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_recognizers() {
        assert!(RangeNotationParser::is_valid_letter_notation("A1"));
        assert!(RangeNotationParser::is_valid_letter_notation("Sheet1!B2:D10"));
        assert!(RangeNotationParser::is_valid_letter_notation("sheet 1!aa1:zz9"));
        assert!(!RangeNotationParser::is_valid_letter_notation("R1C1"));
        assert!(!RangeNotationParser::is_valid_letter_notation("A0"));
        assert!(!RangeNotationParser::is_valid_letter_notation("A1:B"));
        assert!(!RangeNotationParser::is_valid_letter_notation(""));

        assert!(RangeNotationParser::is_valid_numeric_notation("R5C3"));
        assert!(RangeNotationParser::is_valid_numeric_notation("Sheet1!R2C2:R10C4"));
        assert!(RangeNotationParser::is_valid_numeric_notation("r2c2"));
        assert!(!RangeNotationParser::is_valid_numeric_notation("B2:D10"));
        assert!(!RangeNotationParser::is_valid_numeric_notation("R0C1"));
        assert!(!RangeNotationParser::is_valid_numeric_notation("R1C1:R2"));
    }

    #[test]
    fn test_malformed_range_rejected_by_both_grammars() {
        let input = "not a range";
        assert!(!RangeNotationParser::is_valid_letter_notation(input));
        assert!(!RangeNotationParser::is_valid_numeric_notation(input));
        assert!(matches!(
            RangeNotationParser::parse_letter_notation(input),
            Err(Error::InvalidRangeFormat { .. })
        ));
        assert!(matches!(
            RangeNotationParser::parse_numeric_notation(input),
            Err(Error::InvalidRangeFormat { .. })
        ));
        assert!(matches!(
            RangeNotationParser::parse(input),
            Err(Error::InvalidRangeFormat { .. })
        ));
    }

    #[test]
    fn test_parse_letter_notation() {
        let range = RangeNotationParser::parse_letter_notation("Sheet1!B2:D10").unwrap();
        assert_eq!(range.tab_name(), "Sheet1");
        assert_eq!(range.start_column(), 2);
        assert_eq!(range.start_row(), 2);
        assert_eq!(range.end_column(), Some(4));
        assert_eq!(range.end_row(), Some(10));

        let range = RangeNotationParser::parse_letter_notation("c7").unwrap();
        assert_eq!(range.tab_name(), "");
        assert_eq!(range.start_column(), 3);
        assert_eq!(range.start_row(), 7);
        assert!(range.is_single_cell());
    }

    #[test]
    fn test_parse_numeric_notation() {
        let range = RangeNotationParser::parse_numeric_notation("Sheet1!R2C2:R10C4").unwrap();
        assert_eq!(range.start_row(), 2);
        assert_eq!(range.start_column(), 2);
        assert_eq!(range.end_row(), Some(10));
        assert_eq!(range.end_column(), Some(4));
        assert_eq!(range.letter_notation(), Some("Sheet1!B2:D10"));
    }

    #[test]
    fn test_tab_split_on_last_bang() {
        let range = RangeNotationParser::parse("Q&A!Totals!A1:B2").unwrap();
        assert_eq!(range.tab_name(), "Q&A!Totals");
        assert_eq!(range.start_column(), 1);
        assert_eq!(range.end_column(), Some(2));
    }

    #[test]
    fn test_out_of_range_numbers_fail() {
        assert!(RangeNotationParser::is_valid_numeric_notation("R99999999999C1"));
        assert!(matches!(
            RangeNotationParser::parse("R99999999999C1"),
            Err(Error::InvalidRangeFormat { .. })
        ));
        assert!(matches!(
            RangeNotationParser::parse("ZZZZZZZZ1"),
            Err(Error::InvalidRangeFormat { .. })
        ));
    }

    #[test]
    fn test_letter_roundtrip_preserves_coordinates() {
        for input in ["A1:B2", "tab!aa10:zz20", "Sheet1!XFD1048576:XFD1048576"] {
            let parsed = RangeNotationParser::parse_letter_notation(input).unwrap();
            let rendered = parsed.letter_notation().unwrap().to_string();
            let reparsed = RangeNotationParser::parse_letter_notation(&rendered).unwrap();
            assert_eq!(parsed, reparsed);
        }
    }
}
