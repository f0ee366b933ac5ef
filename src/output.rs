use chrono::NaiveDate;

use crate::metafields;
use crate::models::{CandidateRow, MetafieldRow, ReconciliationRow};
use crate::reconcile;

/// A serialization-agnostic cell; the workbook writer maps each variant onto
/// the matching xlsx cell type.
#[derive(Debug, Clone, PartialEq)]
pub enum OutputCell {
    Text(String),
    Int(i64),
    Date(NaiveDate),
    Formula(String),
    Empty,
}

impl OutputCell {
    fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    fn date_opt(date: Option<NaiveDate>) -> Self {
        match date {
            Some(d) => Self::Date(d),
            None => Self::Empty,
        }
    }

    fn count_opt(count: Option<usize>) -> Self {
        match count {
            Some(n) => Self::Int(n as i64),
            None => Self::Empty,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<OutputCell>>,
}

pub const SUMMARY_HEADERS: &[&str] = &[
    "Promo Name",
    "Source Count",
    "Source Start",
    "Source End",
    "Dest Count",
    "Dest Start",
    "Dest End",
    "Check",
];

pub const DETAIL_HEADERS: &[&str] = &[
    "Status",
    "id",
    "Bob Jane Material",
    "Promo Name",
    "Promo $ Value",
    "Promo % Value",
    "Valid From",
    "Valid To",
    "Slug",
    "Unit",
    "Type",
    "Price Match Skip",
    "Promo Retail Skip",
    "Notify Vendor",
    "Comments",
    "Ad ID",
];

pub const PROMO_HEADERS: &[&str] = &[
    "Variant SKU",
    "Command",
    "Variant Metafield: display.promotion_secondary_text [single_line_text_field]",
    "Variant Metafield: discounts.buy3get1 [boolean]",
    "Variant Metafield: discount_promo.promo_details [single_line_text_field]",
    "Variant Metafield: filter.promotion [single_line_text_field]",
];

// Fixed Detail-sheet constants expected by the import tool.
const STATUS_ACTIVE: i64 = 1;
const UNIT_DEFAULT: i64 = 0;
const PRICE_MATCH_SKIP: i64 = 1;
const PROMO_RETAIL_SKIP: i64 = 1;
const NOTIFY_VENDOR: i64 = 0;

pub fn summary_table(rows: &[ReconciliationRow]) -> OutputTable {
    let rows = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            vec![
                OutputCell::text(row.promo_name.clone()),
                OutputCell::Int(row.source_count as i64),
                OutputCell::date_opt(row.source_period.start),
                OutputCell::date_opt(row.source_period.end),
                OutputCell::count_opt(row.dest_count),
                OutputCell::date_opt(row.dest_period.and_then(|p| p.start)),
                OutputCell::date_opt(row.dest_period.and_then(|p| p.end)),
                OutputCell::Formula(reconcile::check_formula(index)),
            ]
        })
        .collect();
    OutputTable {
        headers: SUMMARY_HEADERS.to_vec(),
        rows,
    }
}

pub fn detail_table(candidates: &[CandidateRow]) -> OutputTable {
    let rows = candidates
        .iter()
        .map(|row| {
            vec![
                OutputCell::Int(STATUS_ACTIVE),
                OutputCell::Empty,
                OutputCell::text(row.sku.clone()),
                OutputCell::text(row.promo_name.clone()),
                OutputCell::Int(row.promo.dollar_value as i64),
                OutputCell::Int(row.promo.percent_value as i64),
                OutputCell::date_opt(row.period.start),
                OutputCell::date_opt(row.period.end),
                OutputCell::Int(row.slug),
                OutputCell::Int(UNIT_DEFAULT),
                OutputCell::text(row.promo.kind.label()),
                OutputCell::Int(PRICE_MATCH_SKIP),
                OutputCell::Int(PROMO_RETAIL_SKIP),
                OutputCell::Int(NOTIFY_VENDOR),
                OutputCell::Empty,
                OutputCell::Empty,
            ]
        })
        .collect();
    OutputTable {
        headers: DETAIL_HEADERS.to_vec(),
        rows,
    }
}

pub fn promo_table(rows: &[MetafieldRow]) -> OutputTable {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                OutputCell::text(row.sku.clone()),
                OutputCell::text(metafields::COMMAND_MERGE),
                OutputCell::text(row.display_text.clone()),
                OutputCell::text(row.buy3get1.clone()),
                OutputCell::text(row.promo_details.clone()),
                OutputCell::text(row.filter_promotion.clone()),
            ]
        })
        .collect();
    OutputTable {
        headers: PROMO_HEADERS.to_vec(),
        rows,
    }
}

/// Same shape and row order as the promo table with every metafield blanked,
/// so importing it nulls whatever the promo file set.
pub fn cleanup_table(rows: &[MetafieldRow]) -> OutputTable {
    let rows = rows
        .iter()
        .map(|row| {
            vec![
                OutputCell::text(row.sku.clone()),
                OutputCell::text(metafields::COMMAND_MERGE),
                OutputCell::Empty,
                OutputCell::Empty,
                OutputCell::Empty,
                OutputCell::Empty,
            ]
        })
        .collect();
    OutputTable {
        headers: PROMO_HEADERS.to_vec(),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::metafields::encode;
    use crate::models::{MatchVerdict, PromoPeriod};

    fn candidate(sku: &str, text: &str) -> CandidateRow {
        CandidateRow {
            sku: sku.to_string(),
            promo_name: "PromoA".to_string(),
            slug: 2003,
            period: PromoPeriod {
                start: chrono::NaiveDate::from_ymd_opt(2026, 3, 1),
                end: chrono::NaiveDate::from_ymd_opt(2026, 3, 31),
            },
            promo: classify(text),
        }
    }

    #[test]
    fn test_summary_layout() {
        let rows = vec![ReconciliationRow {
            promo_name: "PromoA".to_string(),
            source_count: 3,
            source_period: PromoPeriod::none(),
            dest_count: Some(3),
            dest_period: Some(PromoPeriod::none()),
            verdict: MatchVerdict::Ok,
        }];
        let table = summary_table(&rows);
        assert_eq!(table.headers, SUMMARY_HEADERS);
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0][1], OutputCell::Int(3));
        assert_eq!(table.rows[0][2], OutputCell::Empty);
        assert_eq!(
            table.rows[0][7],
            OutputCell::Formula("=IF(AND(B2=E2,C2=F2,D2=G2),\"OK\",\"Mismatch\")".to_string())
        );
    }

    #[test]
    fn test_detail_layout() {
        let table = detail_table(&[candidate("BJC1", "$75 Cash Back")]);
        assert_eq!(table.headers.len(), 16);
        let row = &table.rows[0];
        assert_eq!(row[0], OutputCell::Int(1)); // Status
        assert_eq!(row[1], OutputCell::Empty); // id
        assert_eq!(row[2], OutputCell::Text("BJC1".to_string()));
        assert_eq!(row[4], OutputCell::Int(75)); // Promo $ Value
        assert_eq!(row[5], OutputCell::Int(0)); // Promo % Value
        assert_eq!(
            row[6],
            OutputCell::Date(chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        );
        assert_eq!(row[8], OutputCell::Int(2003)); // Slug
        assert_eq!(row[10], OutputCell::Text("Cash Back".to_string())); // Type
        assert_eq!(row[11], OutputCell::Int(1)); // Price Match Skip
        assert_eq!(row[13], OutputCell::Int(0)); // Notify Vendor
    }

    #[test]
    fn test_promo_and_cleanup_share_shape() {
        let metafields: Vec<_> = [candidate("BJC1", "$75 Cash Back"), candidate("BJC2", "Save 30%")]
            .iter()
            .map(encode)
            .collect();
        let promo = promo_table(&metafields);
        let cleanup = cleanup_table(&metafields);

        assert_eq!(promo.headers, PROMO_HEADERS);
        assert_eq!(cleanup.headers, PROMO_HEADERS);
        assert_eq!(promo.rows.len(), cleanup.rows.len());

        assert_eq!(promo.rows[0][2], OutputCell::Text("$75 Cash Back".to_string()));
        assert_eq!(promo.rows[0][4], OutputCell::Text("$75_$75 Cash Back".to_string()));
        assert_eq!(promo.rows[1][5], OutputCell::Text("Percentage".to_string()));

        // Cleanup keeps SKU and Command, blanks the rest.
        assert_eq!(cleanup.rows[0][0], OutputCell::Text("BJC1".to_string()));
        assert_eq!(cleanup.rows[0][1], OutputCell::Text("MERGE".to_string()));
        for cell in &cleanup.rows[0][2..] {
            assert_eq!(*cell, OutputCell::Empty);
        }
    }

    #[test]
    fn test_empty_metafield_values_become_blank_cells() {
        let metafields = vec![encode(&candidate("BJC1", "$75 Cash Back"))];
        let table = promo_table(&metafields);
        // Cash back has no buy3get1 flag.
        assert_eq!(table.rows[0][3], OutputCell::Empty);
    }
}
