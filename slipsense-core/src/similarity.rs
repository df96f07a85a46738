//! String similarity scoring for fuzzy name matching.

/// Normalized similarity in [0, 1]: `1 - edit_distance / max_len`.
/// Operates on chars, so Thai script scores the same as Latin.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let max_len = a_len.max(b_len);
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

/// Levenshtein edit distance, two-row DP over chars.
fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let n = b_chars.len();

    if a_chars.is_empty() {
        return n;
    }
    if n == 0 {
        return a_chars.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for (i, &a_ch) in a_chars.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &b_ch) in b_chars.iter().enumerate() {
            let cost = if a_ch == b_ch { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_basic() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("abc", "abc"), 0);
    }

    #[test]
    fn test_ratio_identical() {
        assert_eq!(similarity_ratio("สมชาย ใจดี", "สมชาย ใจดี"), 1.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_disjoint() {
        assert_eq!(similarity_ratio("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_ratio_near_miss_above_threshold() {
        // One wrong char in a ten-char name: 0.9
        let r = similarity_ratio("สมชาย ใจดี", "สมชาย ใจดZ");
        assert!(r >= 0.85, "got {r}");
    }

    #[test]
    fn test_ratio_counts_thai_chars_not_bytes() {
        // Byte-based length would dilute the ratio; char-based does not.
        let r = similarity_ratio("ใจดี", "ใจดX");
        assert!((r - 0.75).abs() < 1e-9, "got {r}");
    }
}
