use crate::classify::classify;
use crate::models::{CandidateRow, ProvenanceSummary, SheetTable};
use crate::period::parse_promo_period;

pub const COL_SKU: &str = "BJC Code";
pub const COL_PROMO: &str = "Consumer Promo";
pub const COL_PERIOD: &str = "Promotion Period";

/// A sheet must carry at least these columns to be ingested at all.
pub const REQUIRED_COLUMNS: &[&str] = &[COL_SKU, COL_PROMO, COL_PERIOD];

const SLUG_BASE: i64 = 2000;

pub struct IngestResult {
    pub candidates: Vec<CandidateRow>,
    pub provenance: Vec<ProvenanceSummary>,
}

/// Filter the incoming sheets against the column contract and emit one
/// candidate per valid row plus one provenance summary per contributing
/// sheet.
///
/// Sheets missing required columns are skipped silently, as are rows with no
/// SKU. Slugs are assigned from each sheet's position among ALL sheets,
/// counting the skipped ones, so adding an ineligible sheet ahead of an
/// eligible one still shifts the eligible sheet's slug.
pub fn ingest_sheets(sheets: &[SheetTable]) -> IngestResult {
    let mut candidates = Vec::new();
    let mut provenance = Vec::new();

    for (sheet_idx, sheet) in sheets.iter().enumerate() {
        if !sheet.has_columns(REQUIRED_COLUMNS) {
            continue;
        }
        let surviving: Vec<usize> = (0..sheet.rows.len())
            .filter(|&row| sheet.cell(row, COL_SKU).is_some())
            .collect();
        if surviving.is_empty() {
            continue;
        }

        // The first surviving row's period stands in for the whole sheet;
        // later rows' period text is never parsed.
        let period = parse_promo_period(sheet.cell(surviving[0], COL_PERIOD).unwrap_or(""));

        provenance.push(ProvenanceSummary {
            promo_name: sheet.name.clone(),
            source_count: surviving.len(),
            period,
        });

        let slug = SLUG_BASE + sheet_idx as i64;
        for &row in &surviving {
            let Some(sku) = sheet.cell(row, COL_SKU) else {
                continue;
            };
            candidates.push(CandidateRow {
                sku: sku.to_string(),
                promo_name: sheet.name.clone(),
                slug,
                period,
                promo: classify(sheet.cell(row, COL_PROMO).unwrap_or("")),
            });
        }
    }

    IngestResult {
        candidates,
        provenance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PromoKind;
    use chrono::NaiveDate;

    fn sheet(name: &str, headers: &[&str], rows: &[&[Option<&str>]]) -> SheetTable {
        SheetTable {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| c.map(str::to_string)).collect())
                .collect(),
        }
    }

    const HEADERS: &[&str] = &["BJC Code", "Consumer Promo", "Promotion Period"];

    #[test]
    fn test_basic_sheet() {
        let sheets = vec![sheet(
            "PromoA",
            HEADERS,
            &[
                &[Some("BJC1"), Some("$75 Cash Back"), Some("From 01/03/2026 - 31/03/2026")],
                &[Some("BJC2"), Some("Save 30%"), Some("From 01/03/2026 - 31/03/2026")],
            ],
        )];
        let result = ingest_sheets(&sheets);
        assert_eq!(result.provenance.len(), 1);
        assert_eq!(result.provenance[0].promo_name, "PromoA");
        assert_eq!(result.provenance[0].source_count, 2);
        assert_eq!(
            result.provenance[0].period.start,
            NaiveDate::from_ymd_opt(2026, 3, 1)
        );
        assert_eq!(result.candidates.len(), 2);
        assert_eq!(result.candidates[0].sku, "BJC1");
        assert_eq!(result.candidates[0].promo.kind, PromoKind::CashBack);
        assert_eq!(result.candidates[1].promo.kind, PromoKind::Percentage);
        assert_eq!(result.candidates[0].slug, 2000);
    }

    #[test]
    fn test_sheet_missing_required_column_is_skipped() {
        let sheets = vec![sheet(
            "NoPeriod",
            &["BJC Code", "Consumer Promo"],
            &[&[Some("BJC1"), Some("$75 Cash Back")]],
        )];
        let result = ingest_sheets(&sheets);
        assert!(result.provenance.is_empty());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_rows_without_sku_are_dropped() {
        let sheets = vec![sheet(
            "PromoA",
            HEADERS,
            &[
                &[Some("BJC1"), Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")],
                &[None, Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")],
                &[Some("  "), Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")],
                &[Some("BJC4"), Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")],
            ],
        )];
        let result = ingest_sheets(&sheets);
        assert_eq!(result.provenance[0].source_count, 2);
        let skus: Vec<&str> = result.candidates.iter().map(|c| c.sku.as_str()).collect();
        assert_eq!(skus, vec!["BJC1", "BJC4"]);
    }

    #[test]
    fn test_sheet_with_no_surviving_rows_contributes_nothing() {
        let sheets = vec![sheet(
            "AllBlank",
            HEADERS,
            &[&[None, Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")]],
        )];
        let result = ingest_sheets(&sheets);
        assert!(result.provenance.is_empty());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_slug_counts_skipped_sheets() {
        let sheets = vec![
            sheet("Notes", &["Whatever"], &[&[Some("x")]]),
            sheet(
                "PromoB",
                HEADERS,
                &[&[Some("BJC1"), Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")]],
            ),
        ];
        let result = ingest_sheets(&sheets);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].slug, 2001);
    }

    #[test]
    fn test_first_row_period_is_reused_for_every_row() {
        let sheets = vec![sheet(
            "PromoA",
            HEADERS,
            &[
                &[Some("BJC1"), Some("$75 Cash Back"), Some("1/3/2026 - 31/3/2026")],
                &[Some("BJC2"), Some("$75 Cash Back"), Some("1/4/2026 - 30/4/2026")],
            ],
        )];
        let result = ingest_sheets(&sheets);
        let march = NaiveDate::from_ymd_opt(2026, 3, 1);
        assert_eq!(result.candidates[0].period.start, march);
        assert_eq!(result.candidates[1].period.start, march);
        assert_eq!(result.provenance[0].period.start, march);
    }

    #[test]
    fn test_unparsable_first_period_yields_null_dates() {
        let sheets = vec![sheet(
            "PromoA",
            HEADERS,
            &[&[Some("BJC1"), Some("$75 Cash Back"), Some("TBC")]],
        )];
        let result = ingest_sheets(&sheets);
        assert!(result.provenance[0].period.is_none());
        assert!(result.candidates[0].period.is_none());
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let sheets = vec![sheet(
            "PromoA",
            &["Supplier", "BJC Code", "Consumer Promo", "Promotion Period"],
            &[&[Some("Acme"), Some("BJC1"), Some("Save 30%"), Some("1/3/2026 - 31/3/2026")]],
        )];
        let result = ingest_sheets(&sheets);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.candidates[0].sku, "BJC1");
    }
}
