//! Building rows of cells for writing

use crate::error::RecordResult;
use crate::marshal::to_cell_value;
use crate::raw::RawCell;
use crate::record::SheetRecord;
use crate::schema::RecordSchema;
use sheetwrap_core::CellData;

/// Header row of display names, starting at the schema's first column
///
/// Columns the schema skips are left empty.
pub fn header_cells(schema: &RecordSchema) -> Vec<CellData> {
    let mut cells = Vec::with_capacity(span(schema));
    let mut next_column = schema.min_column_id();
    for field in schema {
        fill_gap(&mut cells, &mut next_column, field.column_id);
        cells.push(CellData::text(field.display_name.as_str()));
        next_column += 1;
    }
    cells
}

/// One row of cells for a record, starting at its schema's first column
pub fn record_to_cells<T: SheetRecord>(record: &T) -> RecordResult<Vec<CellData>> {
    let schema = T::schema();
    let mut cells = Vec::with_capacity(span(schema));
    let mut next_column = schema.min_column_id();
    for field in schema {
        fill_gap(&mut cells, &mut next_column, field.column_id);
        cells.push(to_cell_value(record, field)?);
        next_column += 1;
    }
    Ok(cells)
}

/// Plain text cells, absent values written as empty strings
pub fn string_row_to_cells<C: RawCell>(values: &[C]) -> Vec<CellData> {
    values
        .iter()
        .map(|value| CellData::text(value.raw().unwrap_or("")))
        .collect()
}

fn span(schema: &RecordSchema) -> usize {
    (schema.max_column_id() - schema.min_column_id() + 1) as usize
}

fn fill_gap(cells: &mut Vec<CellData>, next_column: &mut u32, column_id: u32) {
    while *next_column < column_id {
        cells.push(CellData::default());
        *next_column += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldSchema, FieldType};
    use crate::value::FieldValue;
    use once_cell::sync::Lazy;
    use pretty_assertions::assert_eq;
    use sheetwrap_core::CellValue;

    #[derive(Default)]
    struct Sparse {
        label: Option<String>,
        total: Option<f64>,
    }

    static SPARSE: Lazy<RecordSchema> = Lazy::new(|| {
        RecordSchema::builder()
            .field("Total", 4, FieldType::Number)
            .field("Label", 2, FieldType::String)
            .build()
            .unwrap()
    });

    impl SheetRecord for Sparse {
        fn schema() -> &'static RecordSchema {
            &SPARSE
        }

        fn set_field(&mut self, field: &FieldSchema, value: FieldValue) {
            match field.column_id {
                2 => self.label = value.into_string(),
                4 => self.total = value.as_f64(),
                _ => {}
            }
        }

        fn field(&self, field: &FieldSchema) -> Option<FieldValue> {
            match field.column_id {
                2 => self.label.clone().map(FieldValue::String),
                4 => self.total.map(FieldValue::Number),
                _ => None,
            }
        }
    }

    #[test]
    fn test_header_cells_fill_gaps() {
        let cells = header_cells(&SPARSE);
        let text: Vec<String> = cells.iter().map(|cell| cell.value.to_string()).collect();
        assert_eq!(text, vec!["Label", "", "Total"]);
        assert_eq!(cells[1], CellData::default());
    }

    #[test]
    fn test_record_to_cells() {
        let record = Sparse {
            label: Some("Widgets".into()),
            total: Some(12.5),
        };
        let cells = record_to_cells(&record).unwrap();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], CellData::text("Widgets"));
        assert_eq!(cells[1].value, CellValue::Empty);
        assert_eq!(cells[2].value, CellValue::Number(12.5));
        assert!(cells[2].has_number_format());
    }

    #[test]
    fn test_header_cells_reach_last_column() {
        use sheetwrap_core::MAX_THREE_LETTER_COLUMN;

        let schema = RecordSchema::builder()
            .field("First", 1, FieldType::String)
            .field("Last", MAX_THREE_LETTER_COLUMN, FieldType::String)
            .build()
            .unwrap();
        let cells = header_cells(&schema);
        assert_eq!(cells.len(), MAX_THREE_LETTER_COLUMN as usize);
        assert_eq!(cells[0], CellData::text("First"));
        assert_eq!(cells[cells.len() - 1], CellData::text("Last"));

        let alone = RecordSchema::builder()
            .field("Last", MAX_THREE_LETTER_COLUMN, FieldType::String)
            .build()
            .unwrap();
        assert_eq!(header_cells(&alone), vec![CellData::text("Last")]);
    }

    #[test]
    fn test_string_row_to_cells() {
        let cells = string_row_to_cells(&[Some("a"), None, Some("c")]);
        assert_eq!(
            cells,
            vec![CellData::text("a"), CellData::text(""), CellData::text("c")]
        );
    }
}
