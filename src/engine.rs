use crate::error::{PromoError, Result};
use crate::ingest;
use crate::metafields;
use crate::models::{MetafieldRow, ReconciliationRow, SheetTable};
use crate::output::{self, OutputTable};
use crate::reconcile;

/// Everything one conversion run produces. The reconciliation rows ride along
/// so callers can report on the run without re-deriving them from the tables.
pub struct ConversionOutput {
    pub reconciliation: Vec<ReconciliationRow>,
    pub summary: OutputTable,
    pub detail: OutputTable,
    pub promo: OutputTable,
    pub cleanup: OutputTable,
}

/// Run one conversion: ingest, classify, reconcile, and lay out the output
/// tables. Pure function of the input sheets.
pub fn convert(sheets: &[SheetTable]) -> Result<ConversionOutput> {
    let ingested = ingest::ingest_sheets(sheets);
    if ingested.candidates.is_empty() {
        return Err(PromoError::NoValidData);
    }

    let reconciliation = reconcile::reconcile(&ingested.provenance, &ingested.candidates);
    let rows: Vec<MetafieldRow> = ingested.candidates.iter().map(metafields::encode).collect();

    Ok(ConversionOutput {
        summary: output::summary_table(&reconciliation),
        detail: output::detail_table(&ingested.candidates),
        promo: output::promo_table(&rows),
        cleanup: output::cleanup_table(&rows),
        reconciliation,
    })
}
