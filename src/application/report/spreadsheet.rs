//! In-memory Excel export.

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::{Cell, Table};
use crate::error::Result;

/// Sheet name used when the configuration does not override it.
pub const DEFAULT_SHEET_NAME: &str = "BaoCaoNhanSu";

/// Serialize `table` into a single-sheet `.xlsx` workbook.
///
/// Row 0 holds the column names; data starts at row 1. No index column is
/// written and `Null` cells are left blank.
///
/// # Errors
/// Returns an error if the sheet name is invalid or the table exceeds the
/// worksheet limits.
pub fn build_spreadsheet(table: &Table, sheet_name: &str) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    for (index, name) in table.columns().iter().enumerate() {
        worksheet.write_string(0, column(index)?, name)?;
    }

    for (index, cells) in table.rows().iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in cells.iter().enumerate() {
            let col = column(col)?;
            match cell {
                Cell::Null => {}
                #[allow(clippy::cast_precision_loss)]
                Cell::Integer(value) => {
                    worksheet.write_number(row, col, *value as f64)?;
                }
                Cell::Text(value) => {
                    worksheet.write_string(row, col, value)?;
                }
            }
        }
    }

    Ok(workbook.save_to_buffer()?)
}

fn column(index: usize) -> std::result::Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}
