//! Post-OCR cleanup of digit look-alike confusions.
//!
//! OCR over slip images routinely reads `0` as `o`, `1` as `l`, `5` as `s`
//! and `8` as `B` inside amounts and masked account numbers. Substitutions
//! fire only between digit-like neighbors so free-running words are never
//! touched. A single character walk replaces the lookbehind/lookahead the
//! rules would otherwise need.

/// Fix common OCR digit confusions in numeric contexts. Pure and idempotent.
pub fn fix_ocr_digits(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = if i > 0 { chars.get(i - 1).copied() } else { None };
        let next = chars.get(i + 1).copied();
        out.push(substitute(c, prev, next));
    }

    out
}

fn substitute(c: char, prev: Option<char>, next: Option<char>) -> char {
    match c {
        // `x` neighbors cover masked account numbers like xxx-x-5o21
        'o' | 'O' if digit_or_mask(prev) && digit_or_mask(next) => '0',
        'l' | 'I' if digit(prev) && digit(next) => '1',
        's' | 'S' if digit(prev) && digit(next) => '5',
        'B' if digit(prev) && digit(next) => '8',
        _ => c,
    }
}

fn digit(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit())
}

fn digit_or_mask(c: Option<char>) -> bool {
    c.is_some_and(|c| c.is_ascii_digit() || c == 'x' || c == 'X')
}
