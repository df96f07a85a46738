//! Slip plausibility gate: does this OCR text look like a transfer slip at all?

/// Minimum distinct keyword hits for text to count as a slip.
pub const MIN_KEYWORD_MATCHES: usize = 3;

/// Fixed domain vocabulary, lowercase. Covers transaction verbs, success
/// markers, Thai bank/wallet names, currency markers and structural markers
/// (masked account numbers print as `xxx-`).
const SLIP_KEYWORDS: &[&str] = &[
    // transaction verbs
    "โอนเงิน",
    "เติมเงิน",
    "ชำระ",
    "รับเงิน",
    "ถอน",
    "จ่ายบิล",
    "transfer",
    "payment",
    "received",
    "withdraw",
    "top-up",
    "scan to pay",
    // success markers
    "สำเร็จ",
    "successful",
    // banks and wallets
    "กสิกร",
    "k plus",
    "kbank",
    "ไทยพาณิชย์",
    "scb",
    "กรุงเทพ",
    "กรุงไทย",
    "krungthai",
    "กรุงศรี",
    "ttb",
    "พร้อมเพย์",
    "promptpay",
    // currency markers
    "บาท",
    "thb",
    "฿",
    // structural markers
    "ธนาคาร",
    "บัญชี",
    "เลขที่รายการ",
    "reference no",
    "account",
    "xxx-",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlausibilityCheck {
    pub is_plausible: bool,
    /// Distinct keywords found; each counted at most once.
    pub keyword_matches: usize,
}

/// Case-insensitive substring scan of the raw OCR text against the fixed
/// keyword set. Valid only when at least [`MIN_KEYWORD_MATCHES`] hit.
pub fn check_plausibility(text: &str) -> PlausibilityCheck {
    let lower = text.to_lowercase();
    let keyword_matches = SLIP_KEYWORDS.iter().filter(|k| lower.contains(*k)).count();
    PlausibilityCheck {
        is_plausible: keyword_matches >= MIN_KEYWORD_MATCHES,
        keyword_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kplus_slip_passes() {
        let text = "โอนเงินสำเร็จ\nธนาคารกสิกรไทย\nจำนวน 500.00 บาท\nเลขที่รายการ 015xxx";
        let check = check_plausibility(text);
        assert!(check.is_plausible);
        assert!(check.keyword_matches >= 4, "got {}", check.keyword_matches);
    }

    #[test]
    fn test_english_slip_passes() {
        let text = "Transfer successful\nSCB\nAmount 1,200.00 THB\nReference no. 2024021911223";
        let check = check_plausibility(text);
        assert!(check.is_plausible);
    }

    #[test]
    fn test_random_text_rejected() {
        let check = check_plausibility("hello world, see you at lunch tomorrow");
        assert!(!check.is_plausible);
        assert_eq!(check.keyword_matches, 0);
    }

    #[test]
    fn test_empty_text_rejected() {
        let check = check_plausibility("");
        assert!(!check.is_plausible);
        assert_eq!(check.keyword_matches, 0);
    }

    #[test]
    fn test_two_keywords_not_enough() {
        // "โอนเงิน" and "บาท" only
        let check = check_plausibility("โอนเงินไป 100 บาทนะ");
        assert_eq!(check.keyword_matches, 2);
        assert!(!check.is_plausible);
    }

    #[test]
    fn test_keyword_counted_once() {
        let check = check_plausibility("บาท บาท บาท");
        assert_eq!(check.keyword_matches, 1);
    }

    #[test]
    fn test_case_insensitive() {
        let check = check_plausibility("TRANSFER Successful PromptPay");
        assert!(check.is_plausible);
    }
}
