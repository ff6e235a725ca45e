//! Column letter conversion
//!
//! Column letters form a bijective base-26 system: the digits run from 1 (`A`) to 26 (`Z`)
//! and there is no zero digit, so column 26 is `Z` and column 27 is `AA`.

use crate::error::{Error, Result};

/// Convert a 1-based column id to letters (1 = A, 26 = Z, 27 = AA, etc.)
///
/// Column id 0 has no letter representation and yields an empty string.
///
/// # Examples
/// ```
/// use sheetwrap_core::column_to_letters;
///
/// assert_eq!(column_to_letters(1), "A");
/// assert_eq!(column_to_letters(28), "AB");
/// assert_eq!(column_to_letters(703), "AAA");
/// ```
pub fn column_to_letters(column: u32) -> String {
    let mut letters = Vec::new();
    let mut n = column;

    while n > 0 {
        n -= 1;
        letters.push((n % 26) as u8 + b'A');
        n /= 26;
    }

    letters.reverse();
    // Only ASCII uppercase letters were pushed
    letters.into_iter().map(char::from).collect()
}

/// Convert column letters to a 1-based column id (A = 1, Z = 26, AA = 27, etc.)
///
/// Letters are case-insensitive.
pub fn letters_to_column(letters: &str) -> Result<u32> {
    if letters.is_empty() {
        return Err(Error::InvalidColumnLetters(letters.to_string()));
    }

    let mut column: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumnLetters(letters.to_string()));
        }
        let digit = c.to_ascii_uppercase() as u32 - 'A' as u32 + 1;
        column = column
            .checked_mul(26)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(|| Error::InvalidColumnLetters(letters.to_string()))?;
    }

    Ok(column)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_THREE_LETTER_COLUMN;
    use proptest::prelude::*;

    #[test]
    fn test_column_to_letters() {
        assert_eq!(column_to_letters(1), "A");
        assert_eq!(column_to_letters(2), "B");
        assert_eq!(column_to_letters(26), "Z");
        assert_eq!(column_to_letters(27), "AA");
        assert_eq!(column_to_letters(28), "AB");
        assert_eq!(column_to_letters(52), "AZ");
        assert_eq!(column_to_letters(702), "ZZ");
        assert_eq!(column_to_letters(703), "AAA");
        assert_eq!(column_to_letters(16384), "XFD");
        assert_eq!(column_to_letters(MAX_THREE_LETTER_COLUMN), "ZZZ");
        assert_eq!(column_to_letters(0), "");
    }

    #[test]
    fn test_letters_to_column() {
        assert_eq!(letters_to_column("A").unwrap(), 1);
        assert_eq!(letters_to_column("Z").unwrap(), 26);
        assert_eq!(letters_to_column("AA").unwrap(), 27);
        assert_eq!(letters_to_column("ZZ").unwrap(), 702);
        assert_eq!(letters_to_column("AAA").unwrap(), 703);
        assert_eq!(letters_to_column("ZZZ").unwrap(), MAX_THREE_LETTER_COLUMN);

        // Case insensitive
        assert_eq!(letters_to_column("a").unwrap(), 1);
        assert_eq!(letters_to_column("xfd").unwrap(), 16384);
    }

    #[test]
    fn test_letters_to_column_errors() {
        assert!(letters_to_column("").is_err());
        assert!(letters_to_column("A1").is_err());
        assert!(letters_to_column("É").is_err());
        assert_eq!(
            letters_to_column("ZZZZZZZZ"),
            Err(Error::InvalidColumnLetters("ZZZZZZZZ".into()))
        );
    }

    #[test]
    fn test_three_letter_columns_roundtrip() {
        for n in 1..=MAX_THREE_LETTER_COLUMN {
            assert_eq!(letters_to_column(&column_to_letters(n)).unwrap(), n);
        }
    }

    proptest! {
        #[test]
        fn column_letters_are_a_bijection(n in 1u32..=u32::MAX) {
            let letters = column_to_letters(n);
            prop_assert!(letters.chars().all(|c| c.is_ascii_uppercase()));
            prop_assert_eq!(letters_to_column(&letters).unwrap(), n);
        }
    }
}
