use chrono::NaiveDate;

/// One rectangular table read from a source workbook sheet. `None` cells are
/// empty or missing; trailing columns a row does not reach count as missing.
#[derive(Debug, Clone)]
pub struct SheetTable {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl SheetTable {
    pub fn column(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    pub fn has_columns(&self, required: &[&str]) -> bool {
        required.iter().all(|c| self.column(c).is_some())
    }

    /// Trimmed, non-empty cell value at (row, named column).
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.column(header)?;
        self.rows
            .get(row)?
            .get(col)?
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }
}

/// Parsed promotion period. The parser fills both dates or neither; it does
/// not check start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PromoPeriod {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl PromoPeriod {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_none(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromoKind {
    ThreeForFour,
    GiftCard,
    Percentage,
    CashBack,
    Unknown,
}

impl PromoKind {
    /// Downstream "Type" label used in the Detail sheet.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeForFour => "443",
            Self::GiftCard => "Gift Card",
            Self::Percentage => "Percentage",
            Self::CashBack => "Cash Back",
            Self::Unknown => "Unknown",
        }
    }
}

/// Typed promo record derived purely from the free-text description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPromo {
    pub kind: PromoKind,
    pub dollar_value: u32,
    pub percent_value: u32,
    pub display_text: String,
    pub raw_text: String,
}

/// One valid input row joined with its sheet's period and slug.
#[derive(Debug, Clone)]
pub struct CandidateRow {
    pub sku: String,
    pub promo_name: String,
    pub slug: i64,
    pub period: PromoPeriod,
    pub promo: ClassifiedPromo,
}

/// Per-sheet source-side summary, taken before any derivation.
#[derive(Debug, Clone)]
pub struct ProvenanceSummary {
    pub promo_name: String,
    pub source_count: usize,
    pub period: PromoPeriod,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchVerdict {
    Ok,
    Mismatch,
}

impl MatchVerdict {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Mismatch => "Mismatch",
        }
    }
}

/// Provenance left-joined with the destination-side aggregate for one promo.
#[derive(Debug, Clone)]
pub struct ReconciliationRow {
    pub promo_name: String,
    pub source_count: usize,
    pub source_period: PromoPeriod,
    pub dest_count: Option<usize>,
    pub dest_period: Option<PromoPeriod>,
    pub verdict: MatchVerdict,
}

/// Metafield values for one candidate row in the promo update file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetafieldRow {
    pub sku: String,
    pub display_text: String,
    pub buy3get1: String,
    pub promo_details: String,
    pub filter_promotion: String,
}
