//! Marshaling options

/// Options for reading rows into records
#[derive(Debug, Clone)]
pub struct MarshalOptions {
    /// Column id of the first cell in each row (default: 1)
    pub min_column_id: u32,
    /// Fail with a schema mismatch when a row has no cell for a field, instead of
    /// leaving the field unset (default: false)
    pub strict: bool,
    /// Trim surrounding whitespace before parsing non-text fields (default: true)
    pub trim_whitespace: bool,
}

impl Default for MarshalOptions {
    fn default() -> Self {
        Self {
            min_column_id: 1,
            strict: false,
            trim_whitespace: true,
        }
    }
}

impl MarshalOptions {
    /// Options with rows starting at `min_column_id`
    pub fn starting_at(min_column_id: u32) -> Self {
        Self {
            min_column_id,
            ..Self::default()
        }
    }

    /// Enable or disable strict mode
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable trimming of non-text values before parsing
    pub fn trim_whitespace(mut self, trim_whitespace: bool) -> Self {
        self.trim_whitespace = trim_whitespace;
        self
    }
}
