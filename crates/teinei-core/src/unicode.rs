//! Character-level Unicode classification and kana script conversion.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Full-width digits ０..９ (U+FF10..U+FF19).
pub fn is_fullwidth_digit(c: char) -> bool {
    ('\u{FF10}'..='\u{FF19}').contains(&c)
}

/// Map a full-width digit to its ASCII counterpart; other characters pass through.
pub fn fullwidth_digit_to_ascii(c: char) -> char {
    if is_fullwidth_digit(c) {
        char::from_u32(c as u32 - 0xFF10 + '0' as u32).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a katakana string to hiragana.
///
/// Only ァ..ヶ and the iteration marks ヽヾ have hiragana counterparts.
/// ー, ヷ..ヺ, ・ and non-katakana characters are passed through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{30A1}'..='\u{30F6}' | '\u{30FD}'..='\u{30FE}' => {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            }
            _ => c,
        })
        .collect()
}

/// Check if a string is a valid hiragana reading.
///
/// Accepts hiragana characters (U+3040..U+309F) and the prolonged sound mark
/// ー (U+30FC, technically katakana) which commonly appears in readings like
/// "らーめん".
pub fn is_hiragana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || c == 'ー')
}

/// True when `s` is non-empty and made only of ASCII letters, digits and whitespace,
/// i.e. text typed as romaji rather than in Japanese script.
pub fn looks_like_romaji(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_katakana_to_hiragana() {
        assert_eq!(katakana_to_hiragana("コンニチハ"), "こんにちは");
        assert_eq!(katakana_to_hiragana("ラーメン"), "らーめん");
        assert_eq!(katakana_to_hiragana("ヴァイオリン"), "ゔぁいおりん");
        assert_eq!(katakana_to_hiragana("ヶ"), "ゖ");
        assert_eq!(katakana_to_hiragana("ヽヾ"), "ゝゞ");
        assert_eq!(katakana_to_hiragana(""), "");
        assert_eq!(katakana_to_hiragana("abc。"), "abc。");
        assert_eq!(katakana_to_hiragana("ひらがな"), "ひらがな");
    }

    #[test]
    fn test_katakana_without_hiragana_counterpart() {
        assert_eq!(katakana_to_hiragana("ヷ・ー"), "ヷ・ー");
    }

    #[test]
    fn test_is_hiragana_reading() {
        assert!(is_hiragana_reading("かんじ"));
        assert!(is_hiragana_reading("らーめん"));
        assert!(!is_hiragana_reading("カタカナ"));
        assert!(!is_hiragana_reading("abc"));
        assert!(!is_hiragana_reading(""));
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_hiragana('ゞ'));
        assert!(is_fullwidth_digit('５'));
        assert!(!is_fullwidth_digit('5'));
    }

    #[test]
    fn test_fullwidth_digit_to_ascii() {
        let s: String = "１５・００".chars().map(fullwidth_digit_to_ascii).collect();
        assert_eq!(s, "15・00");
    }

    #[test]
    fn test_looks_like_romaji() {
        assert!(looks_like_romaji("konnichiwa"));
        assert!(looks_like_romaji("watashi wa gakusei desu"));
        assert!(looks_like_romaji("ichi 2 san"));
        assert!(!looks_like_romaji("こんにちは"));
        assert!(!looks_like_romaji("hello!"));
        assert!(!looks_like_romaji("123"));
        assert!(!looks_like_romaji(""));
    }
}
