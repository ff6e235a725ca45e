//! # sheetwrap-core
//!
//! Core data structures for the sheetwrap record mapping library.
//!
//! This crate provides the addressing and cell types shared by the rest of sheetwrap:
//! - [`RangeAddress`] - A rectangular or single-cell region on a named tab
//! - [`RangeNotationParser`] - Recognizes and parses `A1`-style and `R1C1`-style range strings
//! - [`CellValue`] and [`CellData`] - Cell payloads ready to be written back to a sheet
//! - [`NumberFormat`] - The pattern and semantic type attached to numeric cells
//!
//! ## Example
//!
//! ```rust
//! use sheetwrap_core::RangeAddress;
//!
//! let range: RangeAddress = "Sheet1!B2:D10".parse().unwrap();
//! assert_eq!(range.start_column(), 2);
//! assert_eq!(range.end_row(), Some(10));
//! assert_eq!(range.numeric_notation(), "Sheet1!R2C2:R10C4");
//!
//! let range = RangeAddress::new("Sheet1", 1, 1, Some(3), Some(1));
//! assert_eq!(range.letter_notation(), Some("Sheet1!A1:C1"));
//! ```

pub mod cell;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use cell::{CellData, CellValue, NumberFormat, NumberFormatType};
pub use error::{Error, Result};
pub use range::{column_to_letters, letters_to_column, RangeAddress, RangeNotationParser};

/// Largest column id that still renders with three letters (`ZZZ`)
pub const MAX_THREE_LETTER_COLUMN: u32 = 18_278;
