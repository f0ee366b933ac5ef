use std::path::Path;

use calamine::{Data, Range, Reader};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::error::{PromoError, Result};
use crate::models::SheetTable;
use crate::output::{OutputCell, OutputTable};

/// Read every sheet of a workbook into a rectangular table. The first row of
/// each sheet is taken as headers; sheets that cannot be ranged are skipped.
pub fn read_workbook(path: &Path) -> Result<Vec<SheetTable>> {
    let mut workbook = calamine::open_workbook_auto(path)
        .map_err(|e| PromoError::Workbook(format!("failed to open {}: {e}", path.display())))?;

    let names = workbook.sheet_names().to_owned();
    let mut sheets = Vec::new();
    for name in names {
        let Ok(range) = workbook.worksheet_range(&name) else {
            continue;
        };
        sheets.push(sheet_from_range(name, &range));
    }
    Ok(sheets)
}

fn sheet_from_range(name: String, range: &Range<Data>) -> SheetTable {
    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|row| {
            row.iter()
                .map(|cell| cell_value(cell).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();
    let rows = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    SheetTable {
        name,
        headers,
        rows,
    }
}

fn cell_value(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        // Whole-number floats are how numeric SKU codes and counts come back
        // from Excel; render them without the trailing ".0".
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string(),
    };
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Write one workbook with the given (sheet name, table) pairs.
pub fn write_workbook(path: &Path, sheets: &[(&str, &OutputTable)]) -> Result<()> {
    let mut workbook = Workbook::new();
    for (name, table) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name)?;
        write_table(worksheet, table)?;
    }
    workbook
        .save(path)
        .map_err(|e| PromoError::Workbook(format!("failed to save {}: {e}", path.display())))?;
    Ok(())
}

fn write_table(worksheet: &mut Worksheet, table: &OutputTable) -> Result<()> {
    for (col, header) in table.headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header)?;
    }
    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = row_idx as u32 + 1;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            match cell {
                OutputCell::Text(s) => {
                    worksheet.write_string(row_num, col_num, s)?;
                }
                OutputCell::Int(i) => {
                    worksheet.write_number(row_num, col_num, *i as f64)?;
                }
                OutputCell::Date(d) => {
                    worksheet.write_string(row_num, col_num, d.format("%Y-%m-%d").to_string())?;
                }
                OutputCell::Formula(f) => {
                    worksheet.write_formula(row_num, col_num, f.as_str())?;
                }
                OutputCell::Empty => {}
            }
        }
    }
    Ok(())
}
