//! Transaction date extraction with Buddhist Era correction.
//!
//! Thai slips print years in BE (พ.ศ. = CE + 543), often as two digits.
//! Every parsed year goes through the same correction before validation,
//! including ISO-looking dates: "2567-02-15" is BE, not a far future.

use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;

#[derive(Clone, Copy)]
enum DateLayout {
    DayFirst,
    YearFirst,
}

const THAI_MONTH_BODY: &str = r"(\d{1,2})\s*(ม\.?ค\.?|ก\.?พ\.?|มี\.?ค\.?|เม\.?ย\.?|พ\.?ค\.?|มิ\.?ย\.?|ก\.?ค\.?|ส\.?ค\.?|ก\.?ย\.?|ต\.?ค\.?|พ\.?ย\.?|ธ\.?ค\.?|มกราคม|กุมภาพันธ์|มีนาคม|เมษายน|พฤษภาคม|มิถุนายน|กรกฎาคม|สิงหาคม|กันยายน|ตุลาคม|พฤศจิกายน|ธันวาคม)\s*(\d{4}|\d{2})";

const THAI_MONTHS: &[(&str, u32)] = &[
    ("มค", 1),
    ("กพ", 2),
    ("มีค", 3),
    ("เมย", 4),
    ("พค", 5),
    ("มิย", 6),
    ("กค", 7),
    ("สค", 8),
    ("กย", 9),
    ("ตค", 10),
    ("พย", 11),
    ("ธค", 12),
    ("มกราคม", 1),
    ("กุมภาพันธ์", 2),
    ("มีนาคม", 3),
    ("เมษายน", 4),
    ("พฤษภาคม", 5),
    ("มิถุนายน", 6),
    ("กรกฎาคม", 7),
    ("สิงหาคม", 8),
    ("กันยายน", 9),
    ("ตุลาคม", 10),
    ("พฤศจิกายน", 11),
    ("ธันวาคม", 12),
];

const ENGLISH_MONTHS: &[(&str, u32)] = &[
    ("jan", 1),
    ("feb", 2),
    ("mar", 3),
    ("apr", 4),
    ("may", 5),
    ("jun", 6),
    ("jul", 7),
    ("aug", 8),
    ("sep", 9),
    ("oct", 10),
    ("nov", 11),
    ("dec", 12),
];

/// Extract the first valid transaction date. Patterns are tried in order;
/// within one pattern every match is considered before moving on.
pub fn extract_date(text: &str) -> Result<Option<NaiveDate>> {
    let patterns: Vec<(String, DateLayout)> = vec![
        (
            r"(\d{1,2})[/\-.](\d{1,2})[/\-.](\d{4})".to_string(),
            DateLayout::DayFirst,
        ),
        (THAI_MONTH_BODY.to_string(), DateLayout::DayFirst),
        (
            r"(?i)(\d{1,2})\s*(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s*(\d{4}|\d{2})"
                .to_string(),
            DateLayout::DayFirst,
        ),
        (r"(\d{4})-(\d{2})-(\d{2})".to_string(), DateLayout::YearFirst),
        (format!(r"วันที่\s*{THAI_MONTH_BODY}"), DateLayout::DayFirst),
    ];

    for (pattern, layout) in &patterns {
        let re = Regex::new(pattern)?;
        for caps in re.captures_iter(text) {
            let (day_raw, month_raw, year_raw) = match layout {
                DateLayout::DayFirst => (&caps[1], &caps[2], &caps[3]),
                DateLayout::YearFirst => (&caps[3], &caps[2], &caps[1]),
            };
            if let Some(date) = build_date(day_raw, month_raw, year_raw) {
                return Ok(Some(date));
            }
        }
    }
    Ok(None)
}

fn build_date(day_raw: &str, month_raw: &str, year_raw: &str) -> Option<NaiveDate> {
    let day: u32 = day_raw.parse().ok()?;
    let month = resolve_month(month_raw)?;
    let year = normalize_year(year_raw.parse().ok()?);

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) || !(1900..=2100).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn resolve_month(raw: &str) -> Option<u32> {
    if raw.chars().all(|c| c.is_ascii_digit()) {
        return raw.parse().ok();
    }
    let cleaned = raw.to_lowercase().replace('.', "");
    if let Some((_, m)) = THAI_MONTHS.iter().find(|(name, _)| *name == cleaned) {
        return Some(*m);
    }
    ENGLISH_MONTHS
        .iter()
        .find(|(name, _)| cleaned.starts_with(name))
        .map(|(_, m)| *m)
}

/// BE years become CE; two-digit years pivot at 50.
fn normalize_year(year: i32) -> i32 {
    if year > 2500 {
        year - 543
    } else if year < 100 {
        if year >= 50 { 2500 + year - 543 } else { 2000 + year }
    } else {
        year
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_numeric_be_year() {
        let date = extract_date("15/02/2567").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_numeric_ce_year_unchanged() {
        let date = extract_date("15/02/2024").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_thai_month_abbreviation() {
        let date = extract_date("15 ก.พ. 2567").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_thai_month_full_name() {
        let date = extract_date("1 มกราคม 2568").unwrap();
        assert_eq!(date, Some(d(2025, 1, 1)));
    }

    #[test]
    fn test_two_digit_be_year() {
        // 67 >= 50 reads as BE 2567
        let date = extract_date("15 ก.พ. 67").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_two_digit_ce_year() {
        // 24 < 50 reads as CE 2024
        let date = extract_date("15 Feb 24").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_english_month_full() {
        let date = extract_date("3 March 2024").unwrap();
        assert_eq!(date, Some(d(2024, 3, 3)));
    }

    #[test]
    fn test_iso_layout_with_be_year() {
        let date = extract_date("2567-02-15").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_iso_layout_ce() {
        let date = extract_date("2024-02-15").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_invalid_day_skipped_for_later_match() {
        // 32/01 is structurally a match but not a date; the next match wins.
        let date = extract_date("32/01/2567 แล้วก็ 15/02/2567").unwrap();
        assert_eq!(date, Some(d(2024, 2, 15)));
    }

    #[test]
    fn test_nonexistent_calendar_date_rejected() {
        assert_eq!(extract_date("30/02/2567").unwrap(), None);
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date("โอนเงินสำเร็จ 500 บาท").unwrap(), None);
    }
}
