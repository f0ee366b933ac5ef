use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ClassifiedPromo, PromoKind};

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)%").unwrap());

struct Outcome {
    kind: PromoKind,
    dollar: u32,
    percent: u32,
    display: String,
}

type RuleMatch = fn(&str) -> bool;
type RuleBuild = fn(&str) -> Outcome;

// Walked top to bottom, first match wins. The order is load-bearing: a text
// like "20% off plus $50 Gift Card" must classify as a gift card, not a
// percentage, and any stray digit run only becomes cash back after every
// other rule has passed on it.
const RULES: &[(RuleMatch, RuleBuild)] = &[
    (matches_three_for_four, build_three_for_four),
    (matches_gift_card, build_gift_card),
    (matches_percentage, build_percentage),
    (matches_cash_back, build_cash_back),
];

/// Classify a free-text promo description into a typed promo record.
///
/// Pure function of the input text; unmatched text falls through to
/// `PromoKind::Unknown` with the text carried verbatim.
pub fn classify(raw: &str) -> ClassifiedPromo {
    let text = raw.trim();
    for (matches, build) in RULES {
        if matches(text) {
            let outcome = build(text);
            return ClassifiedPromo {
                kind: outcome.kind,
                dollar_value: outcome.dollar,
                percent_value: outcome.percent,
                display_text: outcome.display,
                raw_text: text.to_string(),
            };
        }
    }
    ClassifiedPromo {
        kind: PromoKind::Unknown,
        dollar_value: 0,
        percent_value: 0,
        display_text: text.to_string(),
        raw_text: text.to_string(),
    }
}

fn matches_three_for_four(text: &str) -> bool {
    text.contains("443") || text.contains("Buy 3 Get 1")
}

fn build_three_for_four(_text: &str) -> Outcome {
    Outcome {
        kind: PromoKind::ThreeForFour,
        dollar: 0,
        percent: 0,
        display: "Buy 3 Get 1 Free".to_string(),
    }
}

fn matches_gift_card(text: &str) -> bool {
    text.contains("Gift Card") || text.contains("Fuel Card")
}

fn build_gift_card(text: &str) -> Outcome {
    let display = match DIGITS.find(text) {
        Some(m) => format!("${} eGift Card", m.as_str()),
        None => text.to_string(),
    };
    Outcome {
        kind: PromoKind::GiftCard,
        dollar: 0,
        percent: 0,
        display,
    }
}

fn matches_percentage(text: &str) -> bool {
    text.contains('%')
}

fn build_percentage(text: &str) -> Outcome {
    let percent = PERCENT
        .captures(text)
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(0);
    let display = if text.to_lowercase().contains("max") {
        text.to_string()
    } else {
        format!("{percent}% Off")
    };
    Outcome {
        kind: PromoKind::Percentage,
        dollar: 0,
        percent,
        display,
    }
}

fn matches_cash_back(text: &str) -> bool {
    DIGITS.is_match(text)
}

fn build_cash_back(text: &str) -> Outcome {
    let dollar = DIGITS
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0);
    Outcome {
        kind: PromoKind::CashBack,
        dollar,
        percent: 0,
        display: format!("${dollar} Cash Back"),
    }
}
