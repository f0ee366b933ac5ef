use std::collections::HashMap;

use crate::models::{
    CandidateRow, MatchVerdict, PromoPeriod, ProvenanceSummary, ReconciliationRow,
};

/// Cross-check source-side provenance against the derived candidate rows.
///
/// Candidates are grouped by promo name; each group's count and the period of
/// its first row form the destination side. The provenance set drives the
/// output (a left join), so a provenance row with no candidate group still
/// appears, with null destination fields and a Mismatch verdict.
pub fn reconcile(
    provenance: &[ProvenanceSummary],
    candidates: &[CandidateRow],
) -> Vec<ReconciliationRow> {
    let mut groups: HashMap<&str, (usize, PromoPeriod)> = HashMap::new();
    for candidate in candidates {
        let entry = groups
            .entry(candidate.promo_name.as_str())
            .or_insert((0, candidate.period));
        entry.0 += 1;
    }

    provenance
        .iter()
        .map(|source| {
            let dest = groups.get(source.promo_name.as_str()).copied();
            let dest_count = dest.map(|(count, _)| count);
            let dest_period = dest.map(|(_, period)| period);
            let verdict = match dest {
                Some((count, period))
                    if count == source.source_count && period == source.period =>
                {
                    MatchVerdict::Ok
                }
                _ => MatchVerdict::Mismatch,
            };
            ReconciliationRow {
                promo_name: source.promo_name.clone(),
                source_count: source.source_count,
                source_period: source.period,
                dest_count,
                dest_period,
                verdict,
            }
        })
        .collect()
}

/// Self-checking spreadsheet formula for the Check column. `index` is the
/// 0-based data row; row 1 of the sheet is the header, so data starts at 2.
/// Compares the source triple (B,C,D) against the destination triple (E,F,G)
/// so the verdict recomputes live if the cells are edited in a viewer.
pub fn check_formula(index: usize) -> String {
    let r = index + 2;
    format!("=IF(AND(B{r}=E{r},C{r}=F{r},D{r}=G{r}),\"OK\",\"Mismatch\")")
}
