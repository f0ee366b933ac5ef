use std::path::Path;

use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt;
use crate::ingest;
use crate::period::parse_promo_period;
use crate::workbook;

pub fn run(file: &str) -> Result<()> {
    let sheets = workbook::read_workbook(Path::new(file))?;

    let mut table = Table::new();
    table.set_header(vec!["Sheet", "Eligible", "Rows with SKU", "First Period"]);
    for sheet in &sheets {
        let eligible = sheet.has_columns(ingest::REQUIRED_COLUMNS);
        let sku_rows: Vec<usize> = (0..sheet.rows.len())
            .filter(|&row| sheet.cell(row, ingest::COL_SKU).is_some())
            .collect();
        let first_period = sku_rows
            .first()
            .and_then(|&row| sheet.cell(row, ingest::COL_PERIOD))
            .map(parse_promo_period);
        table.add_row(vec![
            Cell::new(&sheet.name),
            Cell::new(if eligible { "yes" } else { "no" }),
            Cell::new(sku_rows.len()),
            Cell::new(
                first_period
                    .map(|p| fmt::period(&p))
                    .unwrap_or_default(),
            ),
        ]);
    }
    println!("Sheets\n{table}");
    Ok(())
}
