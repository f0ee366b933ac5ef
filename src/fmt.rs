use chrono::NaiveDate;

use crate::models::PromoPeriod;

/// Format an optional date as YYYY-MM-DD, empty when absent.
pub fn date(value: Option<NaiveDate>) -> String {
    value
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

/// Format a period as "start to end", empty when unparsed.
pub fn period(value: &PromoPeriod) -> String {
    if value.is_none() {
        return String::new();
    }
    format!("{} to {}", date(value.start), date(value.end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_formatting() {
        assert_eq!(date(NaiveDate::from_ymd_opt(2026, 3, 1)), "2026-03-01");
        assert_eq!(date(None), "");
    }

    #[test]
    fn test_period_formatting() {
        let p = PromoPeriod {
            start: NaiveDate::from_ymd_opt(2026, 3, 1),
            end: NaiveDate::from_ymd_opt(2026, 3, 31),
        };
        assert_eq!(period(&p), "2026-03-01 to 2026-03-31");
        assert_eq!(period(&PromoPeriod::none()), "");
    }
}
