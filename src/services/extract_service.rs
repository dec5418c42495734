use crate::config::ExtractionConfig;
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unreadable spreadsheet: {0}")]
    Workbook(#[from] calamine::Error),
    #[error("Spreadsheet contains no sheets")]
    NoSheets,
}

/// Structural convention of the recipient spreadsheets: how many leading rows
/// are headers and which column holds the phone number. The first sheet is
/// always the one read; that is a fixed convention, not a choice.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionPolicy {
    pub header_rows: usize,
    pub recipient_column: usize,
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self { header_rows: 1, recipient_column: 1 }
    }
}

impl From<&ExtractionConfig> for ExtractionPolicy {
    fn from(config: &ExtractionConfig) -> Self {
        Self {
            header_rows: config.header_rows,
            recipient_column: config.recipient_column,
        }
    }
}

impl ExtractionPolicy {
    /// Reads recipient candidates out of a spreadsheet byte buffer.
    ///
    /// Candidates come back raw: trimmed, non-empty, in row order, duplicates
    /// preserved. Prefixing and deduplication happen downstream in
    /// `RecipientList::normalized`, so typed and imported recipients go
    /// through the same normalization.
    ///
    /// # Errors
    /// Returns `ExtractError` when the bytes are not a recognizable workbook
    /// or the workbook has no sheets. An unreadable file never yields a
    /// partial list.
    pub fn extract(&self, bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
        let range = workbook.worksheet_range_at(0).ok_or(ExtractError::NoSheets)??;

        let mut candidates = Vec::new();
        for row in range.rows().skip(self.header_rows) {
            let Some(cell) = row.get(self.recipient_column) else {
                continue;
            };
            if let Some(value) = cell_to_candidate(cell) {
                candidates.push(value);
            }
        }

        tracing::debug!(count = candidates.len(), "Extracted recipient candidates");
        Ok(candidates)
    }
}

/// Renders one cell as a candidate string. Spreadsheets store phone numbers
/// as floats, so integral floats print without the fractional part.
#[allow(clippy::cast_possible_truncation)]
fn cell_to_candidate(cell: &Data) -> Option<String> {
    let value = match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        _ => return None,
    };
    if value.is_empty() { None } else { Some(value) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;

    fn workbook_with_rows(rows: &[(&str, &str)]) -> Vec<u8> {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Phone").unwrap();
        for (i, (name, phone)) in rows.iter().enumerate() {
            let row = u32::try_from(i).unwrap() + 1;
            sheet.write_string(row, 0, *name).unwrap();
            sheet.write_string(row, 1, *phone).unwrap();
        }
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn test_extracts_second_column_in_row_order() {
        let bytes = workbook_with_rows(&[
            ("Alice", "5551234"),
            ("Bob", "5555678"),
            ("Carol", "5559999"),
        ]);

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert_eq!(candidates, vec!["5551234", "5555678", "5559999"]);
    }

    #[test]
    fn test_skips_header_row_regardless_of_content() {
        let bytes = workbook_with_rows(&[("Alice", "5551234")]);

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert!(!candidates.contains(&"Phone".to_string()));
        assert_eq!(candidates, vec!["5551234"]);
    }

    #[test]
    fn test_rows_without_second_column_yield_nothing() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "Name").unwrap();
        sheet.write_string(0, 1, "Phone").unwrap();
        sheet.write_string(1, 0, "Alice").unwrap();
        sheet.write_string(2, 0, "Bob").unwrap();
        sheet.write_string(2, 1, "5555678").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert_eq!(candidates, vec!["5555678"]);
    }

    #[test]
    fn test_blank_cells_are_dropped() {
        let bytes = workbook_with_rows(&[("Alice", "   "), ("Bob", "5555678"), ("Carol", "")]);

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert_eq!(candidates, vec!["5555678"]);
    }

    #[test]
    fn test_numeric_cells_render_without_fraction() {
        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 1, "Phone").unwrap();
        sheet.write_number(1, 1, 5_551_234.0).unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert_eq!(candidates, vec!["5551234"]);
    }

    #[test]
    fn test_duplicates_survive_extraction() {
        // Dedup is RecipientList's invariant, not the extractor's.
        let bytes = workbook_with_rows(&[("Alice", "5551234"), ("Bob", "5551234")]);

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert_eq!(candidates, vec!["5551234", "5551234"]);
    }

    #[test]
    fn test_garbage_bytes_are_a_parse_error() {
        let result = ExtractionPolicy::default().extract(b"definitely not a workbook");
        assert!(result.is_err());
    }

    #[test]
    fn test_header_only_workbook_yields_empty_list() {
        let bytes = workbook_with_rows(&[]);

        let candidates = ExtractionPolicy::default().extract(&bytes).unwrap();
        assert!(candidates.is_empty());
    }
}
