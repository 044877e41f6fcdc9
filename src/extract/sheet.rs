//! Spreadsheet text extraction.
//!
//! Every sheet in the workbook is rendered in workbook order: each row
//! becomes one line of space-joined cell values, and each sheet's block
//! of rows ends with a newline. Column alignment is not preserved; only
//! the cell values matter to the masking passes.

use super::DocumentExtractor;
use crate::error::{MaskError, MaskResult};
use calamine::{open_workbook_auto, Data, Reader};
use std::path::Path;

/// Extractor for `.xls` and `.xlsx` workbooks backed by `calamine`.
#[derive(Debug, Clone, Default)]
pub struct SpreadsheetExtractor;

impl SpreadsheetExtractor {
    /// Creates a new spreadsheet extractor.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentExtractor for SpreadsheetExtractor {
    fn extensions(&self) -> &'static [&'static str] {
        &["xls", "xlsx"]
    }

    fn name(&self) -> &'static str {
        "spreadsheet"
    }

    fn extract(&self, path: &Path) -> MaskResult<String> {
        let mut workbook =
            open_workbook_auto(path).map_err(|err| MaskError::extraction(path, err))?;

        let mut text = String::new();
        for sheet in workbook.sheet_names() {
            let range = workbook
                .worksheet_range(&sheet)
                .map_err(|err| MaskError::extraction(path, err))?;

            let rows: Vec<String> = range.rows().map(render_row).collect();
            text.push_str(&rows.join("\n"));
            text.push('\n');
        }

        Ok(text)
    }
}

fn render_row(row: &[Data]) -> String {
    row.iter()
        .map(|cell| cell.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
