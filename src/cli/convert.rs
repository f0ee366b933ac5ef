use std::path::{Path, PathBuf};

use colored::Colorize;
use comfy_table::{Cell, Table};
use serde::Serialize;

use crate::engine::{self, ConversionOutput};
use crate::error::Result;
use crate::fmt;
use crate::models::{MatchVerdict, ReconciliationRow};
use crate::workbook;

const MARKETPLACE_FILE: &str = "Marketplace_File.xlsx";
const PROMO_FILE: &str = "Shopify x Matrixify file.xlsx";
const CLEANUP_FILE: &str = "Shopify x Matrixify Blank Cleanup File.xlsx";

pub fn run(file: &str, output_dir: Option<&str>, json: bool) -> Result<()> {
    let sheets = workbook::read_workbook(Path::new(file))?;
    let output = engine::convert(&sheets)?;

    let base = output_dir.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let run_dir = base.join(format!("Shopify_Promo_{stamp}"));
    std::fs::create_dir_all(&run_dir)?;

    if let Err(e) = write_files(&run_dir, &output) {
        // Never leave a partial output set behind.
        let _ = std::fs::remove_dir_all(&run_dir);
        return Err(e);
    }

    if json {
        print_json(&output.reconciliation)?;
    } else {
        print_report(&output, &run_dir);
    }
    Ok(())
}

fn write_files(run_dir: &Path, output: &ConversionOutput) -> Result<()> {
    workbook::write_workbook(
        &run_dir.join(MARKETPLACE_FILE),
        &[("Summary", &output.summary), ("Detail", &output.detail)],
    )?;
    workbook::write_workbook(&run_dir.join(PROMO_FILE), &[("Promo", &output.promo)])?;
    workbook::write_workbook(&run_dir.join(CLEANUP_FILE), &[("Cleanup", &output.cleanup)])?;
    Ok(())
}

fn print_report(output: &ConversionOutput, run_dir: &Path) {
    let mut table = Table::new();
    table.set_header(vec![
        "Promo Name",
        "Source Count",
        "Dest Count",
        "Source Period",
        "Dest Period",
        "Check",
    ]);
    for row in &output.reconciliation {
        let verdict = match row.verdict {
            MatchVerdict::Ok => row.verdict.label().green(),
            MatchVerdict::Mismatch => row.verdict.label().red(),
        };
        table.add_row(vec![
            Cell::new(&row.promo_name),
            Cell::new(row.source_count),
            Cell::new(
                row.dest_count
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
            ),
            Cell::new(fmt::period(&row.source_period)),
            Cell::new(
                row.dest_period
                    .map(|p| fmt::period(&p))
                    .unwrap_or_default(),
            ),
            Cell::new(verdict),
        ]);
    }
    println!("Reconciliation\n{table}");
    println!(
        "\n{} promo rows written to {}",
        output.detail.rows.len(),
        run_dir.display()
    );
}

#[derive(Serialize)]
struct PromoReport<'a> {
    promo_name: &'a str,
    source_count: usize,
    source_start: String,
    source_end: String,
    dest_count: Option<usize>,
    dest_start: String,
    dest_end: String,
    verdict: &'static str,
}

fn print_json(rows: &[ReconciliationRow]) -> Result<()> {
    let report: Vec<PromoReport> = rows
        .iter()
        .map(|row| PromoReport {
            promo_name: &row.promo_name,
            source_count: row.source_count,
            source_start: fmt::date(row.source_period.start),
            source_end: fmt::date(row.source_period.end),
            dest_count: row.dest_count,
            dest_start: fmt::date(row.dest_period.and_then(|p| p.start)),
            dest_end: fmt::date(row.dest_period.and_then(|p| p.end)),
            verdict: row.verdict.label(),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
