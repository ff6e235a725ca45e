//! Raw cell text as handed over by the transport layer

use std::borrow::Cow;

/// A raw, untyped cell read from a sheet row
///
/// `None` marks a cell that is present in the row but carries no value; it reads the
/// same as an empty string.
pub trait RawCell {
    /// The cell's text, if any
    fn raw(&self) -> Option<&str>;
}

impl RawCell for String {
    fn raw(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl RawCell for &str {
    fn raw(&self) -> Option<&str> {
        Some(*self)
    }
}

impl RawCell for Cow<'_, str> {
    fn raw(&self) -> Option<&str> {
        Some(&**self)
    }
}

impl RawCell for Option<String> {
    fn raw(&self) -> Option<&str> {
        self.as_deref()
    }
}

impl RawCell for Option<&str> {
    fn raw(&self) -> Option<&str> {
        *self
    }
}
