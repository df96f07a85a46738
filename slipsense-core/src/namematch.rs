//! Per-candidate name matching against the requesting user's registered name.
//!
//! The grade vocabulary and tolerance rules follow the bank-slip reality that
//! senders are printed in full while receivers are often abbreviated
//! ("สมชาย ใ" for "สมชาย ใจดี"). Whether the match is *full* or *abbreviated*
//! is the signal the classifier turns into a money direction.

use serde::{Deserialize, Serialize};

use crate::similarity::similarity_ratio;

/// Full-string similarity at or above this is as good as an exact match.
pub const FULL_SIMILARITY_THRESHOLD: f64 = 0.85;
/// Last-name similarity at or above this still counts as the full name.
pub const LAST_NAME_SIMILARITY_THRESHOLD: f64 = 0.80;
/// First-name similarity for the fuzzy fallback branch.
pub const FIRST_NAME_SIMILARITY_THRESHOLD: f64 = 0.80;

/// How a candidate matched, strongest first. The best grade per run is
/// reported to the caller as `match_confidence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchGrade {
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "fuzzy_full")]
    FuzzyFull,
    #[serde(rename = "abbreviated")]
    Abbreviated,
    #[serde(rename = "partial")]
    Partial,
    #[serde(rename = "first_only")]
    FirstOnly,
    #[serde(rename = "fuzzy_first")]
    FuzzyFirst,
    #[serde(rename = "fuzzy_both")]
    FuzzyBoth,
    #[serde(rename = "name_abbreviated")]
    NameAbbreviated,
    #[serde(rename = "no_match")]
    NoMatch,
}

impl MatchGrade {
    /// Lower is stronger; used to keep the best match across candidates.
    pub fn priority(&self) -> usize {
        match self {
            MatchGrade::Full => 0,
            MatchGrade::FuzzyFull => 1,
            MatchGrade::Abbreviated => 2,
            MatchGrade::Partial => 3,
            MatchGrade::FirstOnly => 4,
            MatchGrade::FuzzyFirst => 5,
            MatchGrade::FuzzyBoth => 6,
            MatchGrade::NameAbbreviated => 7,
            MatchGrade::NoMatch => 8,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchGrade::Full => "full",
            MatchGrade::FuzzyFull => "fuzzy_full",
            MatchGrade::Abbreviated => "abbreviated",
            MatchGrade::Partial => "partial",
            MatchGrade::FirstOnly => "first_only",
            MatchGrade::FuzzyFirst => "fuzzy_first",
            MatchGrade::FuzzyBoth => "fuzzy_both",
            MatchGrade::NameAbbreviated => "name_abbreviated",
            MatchGrade::NoMatch => "no_match",
        }
    }
}

/// Result of matching one candidate against the user identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameMatchResult {
    pub is_match: bool,
    /// True only when the candidate carries the user's complete name
    /// (exact, >= 0.85 similar overall, or exact first + exact/0.80 last).
    pub is_full_name: bool,
    pub grade: MatchGrade,
    pub detail: String,
}

impl NameMatchResult {
    fn matched(grade: MatchGrade, is_full_name: bool, detail: String) -> Self {
        Self { is_match: true, is_full_name, grade, detail }
    }

    fn no_match(detail: String) -> Self {
        Self { is_match: false, is_full_name: false, grade: MatchGrade::NoMatch, detail }
    }
}

/// Honorifics stripped before comparison. Longer forms first so "นางสาว"
/// never loses its tail to "นาง". Periods are removed before this runs,
/// so "น.ส." arrives as "นส".
const HONORIFICS: &[&str] = &["นางสาว", "นส", "นาง", "นาย", "mrs", "ms", "mr"];

/// Normalize a person name for comparison: drop periods, strip a leading
/// honorific, lowercase, collapse whitespace.
pub fn normalize_person_name(name: &str) -> String {
    let no_periods: String = name.chars().filter(|&c| c != '.').collect();
    let lower = no_periods.to_lowercase();
    let mut rest = lower.trim();
    for h in HONORIFICS {
        if let Some(stripped) = rest.strip_prefix(h) {
            rest = stripped.trim_start();
            break;
        }
    }
    rest.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Match one extracted candidate against the user's first/last name.
/// Never fails; an undecidable pair is simply `NoMatch`.
pub fn match_candidate(candidate: &str, user_first: &str, user_last: &str) -> NameMatchResult {
    let slip_norm = normalize_person_name(candidate);
    let first_norm = normalize_person_name(user_first);
    let last_norm = normalize_person_name(user_last);
    let full_norm = format!("{first_norm} {last_norm}").trim().to_string();

    if slip_norm.is_empty() {
        return NameMatchResult::no_match("ไม่พบชื่อใน slip".to_string());
    }
    if full_norm.is_empty() {
        return NameMatchResult::no_match("ผู้ใช้ไม่มีชื่อสำหรับเปรียบเทียบ".to_string());
    }

    let mut parts = slip_norm.split_whitespace();
    let slip_first = parts.next().unwrap_or("");
    let slip_last = parts.next().unwrap_or("");

    // Whole-string checks first
    if slip_norm == full_norm {
        return NameMatchResult::matched(
            MatchGrade::Full,
            true,
            format!("ชื่อ-นามสกุลตรงกันทั้งหมด: {candidate}"),
        );
    }

    let full_sim = similarity_ratio(&slip_norm, &full_norm);
    if full_sim >= FULL_SIMILARITY_THRESHOLD {
        return NameMatchResult::matched(
            MatchGrade::FuzzyFull,
            true,
            format!(
                "ชื่อ-นามสกุลใกล้เคียงมาก ({}%): {candidate}",
                (full_sim * 100.0) as u32
            ),
        );
    }

    // Exact first name with last-name abbreviation tolerance
    if slip_first == first_norm {
        if slip_last.is_empty() {
            return NameMatchResult::matched(
                MatchGrade::FirstOnly,
                false,
                format!("ชื่อตรง (ไม่มีนามสกุลใน slip): {candidate}"),
            );
        }
        if slip_last == last_norm {
            return NameMatchResult::matched(
                MatchGrade::Full,
                true,
                format!("ชื่อ-นามสกุลตรงกัน: {candidate}"),
            );
        }
        if last_norm.starts_with(slip_last) {
            return NameMatchResult::matched(
                MatchGrade::Abbreviated,
                false,
                format!("ชื่อตรง นามสกุลย่อ: {candidate}"),
            );
        }
        let last_sim = similarity_ratio(slip_last, &last_norm);
        if last_sim >= LAST_NAME_SIMILARITY_THRESHOLD {
            return NameMatchResult::matched(
                MatchGrade::Partial,
                true,
                format!(
                    "ชื่อตรง นามสกุลใกล้เคียง ({}%): {candidate}",
                    (last_sim * 100.0) as u32
                ),
            );
        }
        if slip_last.chars().count() <= 2 {
            return NameMatchResult::matched(
                MatchGrade::Abbreviated,
                false,
                format!("ชื่อตรง นามสกุลอาจย่อ: {candidate}"),
            );
        }
        return NameMatchResult::no_match(format!(
            "ชื่อตรงแต่นามสกุลต่างกัน: {candidate} vs {user_last}"
        ));
    }

    // Fuzzy first name
    let first_sim = similarity_ratio(slip_first, &first_norm);
    if first_sim >= FIRST_NAME_SIMILARITY_THRESHOLD {
        if slip_last.is_empty() {
            return NameMatchResult::matched(
                MatchGrade::FuzzyFirst,
                false,
                format!(
                    "ชื่อใกล้เคียง ({}%): {candidate}",
                    (first_sim * 100.0) as u32
                ),
            );
        }
        if similarity_ratio(slip_last, &last_norm) >= 0.6 {
            return NameMatchResult::matched(
                MatchGrade::FuzzyBoth,
                false,
                format!("ชื่อ-นามสกุลใกล้เคียง: {candidate}"),
            );
        }
    }

    // Candidate first token is a prefix of the user's first name
    if first_norm.starts_with(slip_first) && slip_first.chars().count() >= 2 {
        return NameMatchResult::matched(
            MatchGrade::NameAbbreviated,
            false,
            format!("ชื่อย่อตรง: {candidate}"),
        );
    }

    NameMatchResult::no_match(format!("ไม่ตรงกัน: {candidate}"))
}
