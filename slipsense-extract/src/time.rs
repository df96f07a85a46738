//! Transaction time extraction.
//!
//! First pattern that yields a structurally valid HH:MM wins; seconds are
//! dropped. Output is always zero-padded "HH:MM".

use anyhow::Result;
use regex::Regex;

const TIME_PATTERNS: &[&str] = &[
    // full HH:MM:SS
    r"(\d{1,2}:\d{2}):\d{2}",
    // HH:MM followed by a Thai/English time marker or end of text
    r"(?im)(\d{1,2}:\d{2})\s*(?:น\.|น|AM|PM|$)",
    // labeled
    r"เวลา\s*(\d{1,2}:\d{2})",
    // comma-separated after a date
    r",\s*(\d{1,2}:\d{2})",
    r"(?:\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4})[,\s]+(\d{1,2}:\d{2})",
];

/// Extract the transaction time as "HH:MM", or None.
pub fn extract_time(text: &str) -> Result<Option<String>> {
    for pattern in TIME_PATTERNS {
        let re = Regex::new(pattern)?;
        if let Some(caps) = re.captures(text) {
            if let Some(m) = caps.get(1) {
                if let Some(formatted) = parse_hhmm(m.as_str()) {
                    return Ok(Some(formatted));
                }
            }
        }
    }
    Ok(None)
}

fn parse_hhmm(raw: &str) -> Option<String> {
    let (h_raw, m_raw) = raw.split_once(':')?;
    let hour: u32 = h_raw.parse().ok()?;
    let minute: u32 = m_raw.parse().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some(format!("{hour:02}:{minute:02}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hhmmss_drops_seconds() {
        assert_eq!(extract_time("14:30:25").unwrap(), Some("14:30".into()));
    }

    #[test]
    fn test_thai_marker() {
        assert_eq!(extract_time("14:30 น.").unwrap(), Some("14:30".into()));
    }

    #[test]
    fn test_labeled() {
        assert_eq!(extract_time("เวลา 09:05").unwrap(), Some("09:05".into()));
    }

    #[test]
    fn test_zero_padding() {
        assert_eq!(extract_time("เวลา 9:05").unwrap(), Some("09:05".into()));
    }

    #[test]
    fn test_after_date_comma() {
        let t = extract_time("15/02/2567, 14:30").unwrap();
        assert_eq!(t, Some("14:30".into()));
    }

    #[test]
    fn test_invalid_hour_skipped() {
        assert_eq!(extract_time("25:99 น.").unwrap(), None);
    }

    #[test]
    fn test_no_time() {
        assert_eq!(extract_time("โอนเงินสำเร็จ").unwrap(), None);
    }
}
