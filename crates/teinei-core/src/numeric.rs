//! Numeric-literal detection for token surfaces.
//!
//! Digit spans such as "15.00" or "１５・００" have readings that romanize
//! into nonsense, so the assembler keeps them out of furigana and romaji.

use crate::unicode::fullwidth_digit_to_ascii;

/// Return true if `surface` parses as a floating-point number.
///
/// Before parsing, thousands-separator commas are removed, the full-width
/// period "．" and the middle dot "・" become ".", full-width digits become
/// ASCII digits and surrounding whitespace is trimmed. Single `_` digit
/// group separators between two digits are dropped (`1_000`). The remaining
/// text must be accepted by `f64::from_str`.
pub fn is_numeric(surface: &str) -> bool {
    let normalized: String = surface
        .chars()
        .filter(|&c| c != ',')
        .map(|c| match c {
            '．' | '・' => '.',
            c => fullwidth_digit_to_ascii(c),
        })
        .collect();
    strip_digit_separators(normalized.trim()).is_some_and(|s| s.parse::<f64>().is_ok())
}

/// `None` when an underscore is not directly between two ASCII digits.
fn strip_digit_separators(s: &str) -> Option<String> {
    if !s.contains('_') {
        return Some(s.to_string());
    }
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            out.push(c);
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        if !(before.is_some_and(char::is_ascii_digit) && after.is_some_and(char::is_ascii_digit)) {
            return None;
        }
    }
    Some(out)
}
