//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The typed payload written to a cell
//! - [`NumberFormat`] - The display pattern and semantic type of a numeric cell
//! - [`CellData`] - A value together with its optional number format

mod format;
mod value;

pub use format::{NumberFormat, NumberFormatType};
pub use value::{CellData, CellValue};
