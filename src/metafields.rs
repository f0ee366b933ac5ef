use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CandidateRow, ClassifiedPromo, MetafieldRow, PromoKind};

static DOLLAR_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());
static PERCENT_OFF: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\d+%\s*Off").unwrap());

/// Matrixify row command for both the promo and cleanup files.
pub const COMMAND_MERGE: &str = "MERGE";

/// Derive the downstream metafield values for one candidate row.
pub fn encode(candidate: &CandidateRow) -> MetafieldRow {
    let promo = &candidate.promo;
    MetafieldRow {
        sku: candidate.sku.clone(),
        display_text: promo.display_text.clone(),
        buy3get1: buy3get1_flag(promo).to_string(),
        promo_details: promo_details(promo),
        filter_promotion: filter_promotion(&promo.display_text),
    }
}

/// "TRUE" for the 3-for-4 promo, empty string otherwise. The empty string is
/// the downstream "unset" sentinel, not a boolean false.
pub fn buy3get1_flag(promo: &ClassifiedPromo) -> &'static str {
    match promo.kind {
        PromoKind::ThreeForFour => "TRUE",
        _ => "",
    }
}

pub fn promo_details(promo: &ClassifiedPromo) -> String {
    match promo.kind {
        // Re-extracts the amount from the display text rather than reusing
        // the classifier's dollar value; the detail field tracks whatever the
        // display says.
        PromoKind::CashBack => match DOLLAR_AMOUNT.captures(&promo.display_text) {
            Some(caps) => {
                let amt = &caps[1];
                format!("${amt}_${amt} Cash Back")
            }
            None => String::new(),
        },
        PromoKind::Percentage => format!(
            "{}_{}",
            promo.raw_text.replace(' ', ""),
            promo.display_text
        ),
        _ => String::new(),
    }
}

type FilterMatch = fn(&str) -> bool;

// Re-derived from the display text alone, independently of the classified
// kind. A percentage display worded around "max" does not match the first
// pattern and falls through to an empty filter; that disagreement with the
// kind is intentional and relied upon downstream.
const FILTER_RULES: &[(FilterMatch, &str)] = &[
    (display_is_percent_off, "Percentage"),
    (display_has_cash_back, "Cash Back"),
    (display_has_buy3get1, "Buy 3 Get 1 Free"),
    (display_has_gift_card, "Gift Card"),
];

pub fn filter_promotion(display_text: &str) -> String {
    for (matches, value) in FILTER_RULES {
        if matches(display_text) {
            return (*value).to_string();
        }
    }
    String::new()
}

fn display_is_percent_off(text: &str) -> bool {
    PERCENT_OFF.is_match(text)
}

fn display_has_cash_back(text: &str) -> bool {
    text.contains("Cash Back")
}

fn display_has_buy3get1(text: &str) -> bool {
    text.contains("Buy 3 Get 1 Free")
}

fn display_has_gift_card(text: &str) -> bool {
    text.contains("Gift Card") || text.contains("Fuel Card")
}
