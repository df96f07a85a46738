//! Counterparty name extraction.
//!
//! An ordered catalog of cue-phrase patterns, each tagged with the role the
//! cue implies, feeds one generic scan-and-clean routine. Slips print names
//! in mixed Thai/Latin script after phrases like "ไปยัง", "จาก" or
//! "Account Name"; the generic patterns also catch honorific-prefixed names
//! and standalone two-word Thai lines.

use anyhow::Result;
use regex::Regex;
use slipsense_core::types::{NameCandidates, NameRole};

/// One or two words of Thai/Latin name characters, optional trailing
/// abbreviation period.
const NAME_BODY: &str = r"([ก-๙a-zA-Z]+\s+[ก-๙a-zA-Z]+\.?)";

/// Cue-anchored patterns in evaluation order. Within each alternation the
/// longer cue comes first so "ผู้รับเงิน" never loses its tail to "ผู้รับ".
/// English cues carry word boundaries; Thai script has none to anchor on.
const NAME_PATTERNS: &[(&str, NameRole)] = &[
    (
        r"(?i)(?:พร้อมเพย์|PromptPay|พร้อม\s*เพย์)[\s:]*",
        NameRole::Unscoped,
    ),
    (
        r"(?i)(?:ชื่อผู้รับ|ผู้รับเงิน|ผู้รับ|\bRecipient\b|\bTo\b|ไปยัง|บัญชีปลายทาง|ปลายทาง)[\s:]*",
        NameRole::Receiver,
    ),
    (r"(?i)(?:Account\s*Name|ชื่อบัญชี)[\s:]*", NameRole::Receiver),
    (
        r"(?i)(?:ชื่อผู้โอน|ผู้โอน|\bFrom\b|จาก|\bSender\b)[\s:]*",
        NameRole::Sender,
    ),
    (
        r"(?i)(?:รับเงินจาก|โอนจาก|Transfer\s*from)[\s:]*",
        NameRole::Sender,
    ),
    (r"(?:โอนให้|โอนไปยัง|ไปบัญชี)[\s:]*", NameRole::Receiver),
    (r"(?:บัญชีผู้รับ|\bAccount\b)[\s:]*", NameRole::Receiver),
];

/// Generic patterns that already contain their own capture group.
const GENERIC_PATTERNS: &[(&str, NameRole)] = &[
    // honorific-prefixed name anywhere
    (
        r"(?i)((?:นางสาว|น\.ส\.|นาง|นาย|Mr\.|Mrs\.|Ms\.)\s*[ก-๙a-zA-Z]+\s+[ก-๙a-zA-Z]+\.?)",
        NameRole::Unscoped,
    ),
    // standalone two-word Thai line
    (r"(?m)^\s*([ก-๙]+\s+[ก-๙]+\.?)\s*$", NameRole::Unscoped),
    // two-word Thai span following punctuation/whitespace at end of line
    (r"(?m)[:\s]([ก-๙]+\s+[ก-๙]+\.?)\s*$", NameRole::Unscoped),
];

/// Domain words that disqualify a candidate outright.
const NON_NAME_WORDS: &[&str] = &[
    "โอนเงิน",
    "สำเร็จ",
    "บาท",
    "รายการ",
    "ธนาคาร",
    "บัญชี",
    "เลขที่",
    "หมายเหตุ",
    "วันที่",
    "เวลา",
    "transfer",
    "successful",
    "baht",
    "transaction",
    "bank",
    "account",
    "reference",
    "note",
    "date",
    "time",
];

/// Extract deduplicated candidate names per role, first-seen order.
pub fn extract_names(text: &str) -> Result<NameCandidates> {
    let strip_honorific = Regex::new(r"(?i)^(?:นางสาว|น\.?ส\.?|นาง|นาย|Mrs|Ms|Mr)\.?\s*")?;
    let numeric_only = Regex::new(r"^[\d\s.,]+$")?;

    let mut out = NameCandidates::default();

    for (cue, role) in NAME_PATTERNS {
        let re = Regex::new(&format!("{cue}{NAME_BODY}"))?;
        scan(&re, text, *role, &strip_honorific, &numeric_only, &mut out);
    }
    for (pattern, role) in GENERIC_PATTERNS {
        let re = Regex::new(pattern)?;
        scan(&re, text, *role, &strip_honorific, &numeric_only, &mut out);
    }

    Ok(out)
}

fn scan(
    re: &Regex,
    text: &str,
    role: NameRole,
    strip_honorific: &Regex,
    numeric_only: &Regex,
    out: &mut NameCandidates,
) {
    for caps in re.captures_iter(text) {
        let Some(m) = caps.get(1) else { continue };
        if let Some(name) = clean_candidate(m.as_str(), strip_honorific, numeric_only) {
            let list = match role {
                NameRole::Receiver => &mut out.receivers,
                NameRole::Sender => &mut out.senders,
                NameRole::Unscoped => &mut out.general,
            };
            if !list.contains(&name) {
                list.push(name);
            }
        }
    }
}

/// Strip a leading honorific, collapse whitespace, then reject anything too
/// short, purely numeric/punctuation, or containing a domain word.
fn clean_candidate(raw: &str, strip_honorific: &Regex, numeric_only: &Regex) -> Option<String> {
    let stripped = strip_honorific.replace(raw.trim(), "");
    let name = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if name.chars().count() < 2 {
        return None;
    }
    if numeric_only.is_match(&name) {
        return None;
    }
    let lower = name.to_lowercase();
    if NON_NAME_WORDS.iter().any(|w| lower.contains(w)) {
        return None;
    }
    Some(name)
}
