//! Transaction title extraction.
//!
//! Known success-banner literals first, then generic "...สำเร็จ" phrases.
//! Titles are capped so a runaway generic match cannot flood the field.

use anyhow::Result;
use regex::Regex;

const TITLE_MAX_CHARS: usize = 30;

const TITLE_PATTERNS: &[&str] = &[
    r"(เติมเงินพร้อมเพย์)",
    r"(เติมเงินสำเร็จ)",
    r"(โอนเงินสำเร็จ)",
    r"(รายการสำเร็จ)",
    r"(ชำระเงินสำเร็จ)",
    r"(รับเงินสำเร็จ)",
    r"(ถอนเงินสำเร็จ)",
    r"(จ่ายบิลสำเร็จ)",
    r"(?i)(Scan\s*to\s*pay\s*สำเร็จ)",
    r"(?i)(Transfer\s*successful)",
    r"(?i)(Payment\s*successful)",
    r"(?i)(Transaction\s*successful)",
    // any phrase ending in the success word
    r"([ก-๙a-zA-Z\s]+สำเร็จ)",
    r"(โอนเงินให้\s*[ก-๙a-zA-Z\s]+)",
];

/// Extract the transaction title, truncated to a display-safe length.
pub fn extract_title(text: &str) -> Result<Option<String>> {
    for pattern in TITLE_PATTERNS {
        let re = Regex::new(pattern)?;
        if let Some(caps) = re.captures(text) {
            if let Some(m) = caps.get(1) {
                return Ok(Some(truncate_title(m.as_str().trim())));
            }
        }
    }
    Ok(None)
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let head: String = title.chars().take(TITLE_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_banner() {
        let t = extract_title("โอนเงินสำเร็จ\n500.00 บาท").unwrap();
        assert_eq!(t, Some("โอนเงินสำเร็จ".into()));
    }

    #[test]
    fn test_promptpay_topup_wins_over_generic() {
        let t = extract_title("เติมเงินพร้อมเพย์ เรียบร้อย").unwrap();
        assert_eq!(t, Some("เติมเงินพร้อมเพย์".into()));
    }

    #[test]
    fn test_english_banner() {
        let t = extract_title("Transfer Successful\nKBank").unwrap();
        assert_eq!(t, Some("Transfer Successful".into()));
    }

    #[test]
    fn test_generic_success_phrase() {
        let t = extract_title("แสกนจ่ายสำเร็จ").unwrap();
        assert_eq!(t, Some("แสกนจ่ายสำเร็จ".into()));
    }

    #[test]
    fn test_truncation() {
        // 34 chars before the success word, 40 total
        let long = format!("{}สำเร็จ", "ก".repeat(34));
        let t = extract_title(&long).unwrap().unwrap();
        assert_eq!(t.chars().count(), TITLE_MAX_CHARS + 3);
        assert!(t.ends_with("..."));
    }

    #[test]
    fn test_no_title() {
        assert_eq!(extract_title("500.00 บาท").unwrap(), None);
    }
}
