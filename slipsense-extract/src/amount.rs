//! Monetary amount extraction.
//!
//! All pattern matches are pooled into one candidate list before selection.
//! Selection prefers the largest candidate under a "reasonable" ceiling so a
//! 15-digit reference number never beats the actual amount; if everything is
//! over the ceiling, take the minimum.

use anyhow::Result;
use regex::Regex;

/// Anything at or above this is noise (reference numbers, account digits).
const MAX_AMOUNT: f64 = 1_000_000_000.0;
/// Largest amount a slip plausibly carries.
const REASONABLE_CEILING: f64 = 10_000_000.0;

const AMOUNT_PATTERNS: &[&str] = &[
    // labeled amounts
    r"(?i)(?:จำนวนเงิน|จำนวน|ยอดเงิน|ยอดโอน|ยอดรวม|Amount|Total|THB|฿)\s*:?\s*([\d,]+\.?\d*)",
    // amount followed by a currency word
    r"(?i)([\d,]+\.?\d*)\s*(?:บาท|THB|฿)",
    // bare comma-grouped number of 4+ digits: big enough to be money
    r"(?m)(?:^|\s)([\d,]{4,}\.?\d{0,2})(?:\s|$)",
    // bare two-decimal number: looks like a price
    r"(?m)(?:^|\s)([\d,]+\.\d{2})(?:\s|$)",
];

/// Extract the single best amount candidate, or None.
pub fn extract_amount(text: &str) -> Result<Option<f64>> {
    let mut candidates: Vec<f64> = Vec::new();

    for pattern in AMOUNT_PATTERNS {
        let re = Regex::new(pattern)?;
        for caps in re.captures_iter(text) {
            let Some(m) = caps.get(1) else { continue };
            // A malformed token discards that candidate only.
            if let Ok(value) = parse_amount_token(m.as_str()) {
                if value > 0.0 && value < MAX_AMOUNT {
                    candidates.push(value);
                }
            }
        }
    }

    Ok(select_amount(&candidates))
}

fn parse_amount_token(raw: &str) -> Result<f64, std::num::ParseFloatError> {
    raw.replace(',', "").parse::<f64>()
}

fn select_amount(candidates: &[f64]) -> Option<f64> {
    if candidates.is_empty() {
        return None;
    }
    let reasonable_max = candidates
        .iter()
        .copied()
        .filter(|a| *a <= REASONABLE_CEILING)
        .fold(None::<f64>, |acc, a| Some(acc.map_or(a, |m| m.max(a))));
    match reasonable_max {
        Some(max) => Some(max),
        None => candidates
            .iter()
            .copied()
            .fold(None::<f64>, |acc, a| Some(acc.map_or(a, |m| m.min(a)))),
    }
}
