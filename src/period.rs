use chrono::NaiveDate;

use crate::models::PromoPeriod;

/// Parse a promotion-period string like "From 1/3/2026 - 31/3/2026".
///
/// The leading "From " is optional and dates are day-first with no zero
/// padding required. Anything that does not match yields an empty period;
/// this never errors.
pub fn parse_promo_period(text: &str) -> PromoPeriod {
    let clean = text.strip_prefix("From ").unwrap_or(text).trim();
    let parts: Vec<&str> = clean.split(" - ").collect();
    if parts.len() != 2 {
        return PromoPeriod::none();
    }
    match (parse_date_dmy(parts[0]), parse_date_dmy(parts[1])) {
        (Some(start), Some(end)) => PromoPeriod {
            start: Some(start),
            end: Some(end),
        },
        _ => PromoPeriod::none(),
    }
}

fn parse_date_dmy(raw: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let d: u32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    NaiveDate::from_ymd_opt(y, m, d)
}
