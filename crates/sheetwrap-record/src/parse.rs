//! Parsing helpers for formatted cell text

use rust_decimal::Decimal;
use std::str::FromStr;

/// Keep only the digits of a phone number
///
/// ```
/// use sheetwrap_record::parse::remove_extra_characters_from_phone_number;
///
/// assert_eq!(remove_extra_characters_from_phone_number("(703)111-2222"), "7031112222");
/// ```
pub fn remove_extra_characters_from_phone_number(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// Strip a leading US country code (`+1`, or `1` before ten digits) and keep the digits
pub fn remove_us_international_phone_code(phone: &str) -> String {
    let phone = phone.trim();
    if let Some(rest) = phone.strip_prefix("+1") {
        return remove_extra_characters_from_phone_number(rest);
    }

    let digits = remove_extra_characters_from_phone_number(phone);
    match digits.strip_prefix('1') {
        Some(rest) if digits.len() == 11 => rest.to_string(),
        _ => digits,
    }
}

/// Currency symbols ignored by [`parse_currency_string`]
pub const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// Parse a formatted amount such as `$1,234.56`, `-$5.00` or `(12.00)`
///
/// Currency symbols, thousands separators and whitespace are ignored. An amount wrapped
/// in parentheses is negative and may not carry its own sign. Anything else, letters
/// and exponents included, is an error.
pub fn parse_currency_string(amount: &str) -> Result<Decimal, rust_decimal::Error> {
    let amount = amount.trim();
    let (amount, negated) = match amount.strip_prefix('(').and_then(|a| a.strip_suffix(')')) {
        Some(inner) => (inner, true),
        None => (amount, false),
    };

    let cleaned: String = amount
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',' && !CURRENCY_SYMBOLS.contains(c))
        .collect();

    let (signed, digits) = match cleaned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, cleaned.as_str()),
    };
    let well_formed = !(signed && negated)
        && digits.chars().any(|c| c.is_ascii_digit())
        && digits.chars().all(|c| c.is_ascii_digit() || c == '.')
        && digits.matches('.').count() <= 1;
    if !well_formed {
        return Err(rust_decimal::Error::ErrorString(format!(
            "'{}' is not a currency amount",
            amount
        )));
    }

    let value = Decimal::from_str(&cleaned)?;
    Ok(if negated { -value } else { value })
}

/// Drop `,` group separators from a formatted number (`1,234.5` -> `1234.5`)
pub fn remove_group_separators(number: &str) -> String {
    number.chars().filter(|c| *c != ',').collect()
}

/// Parse a truthy/falsy token, ignoring case
///
/// Recognizes `true`/`false`, `yes`/`no`, `y`/`n`, `on`/`off` and `1`/`0`.
pub fn parse_boolean(token: &str) -> Option<bool> {
    match token.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}
