use crate::settings::settings;
use crate::unicode::katakana_to_hiragana;

use super::trie::KanaTable;

fn starts_with_consonant(romaji: &str) -> bool {
    romaji
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_lowercase() && !matches!(c, 'a' | 'i' | 'u' | 'e' | 'o'))
}

fn starts_with_vowel_or_y(romaji: &str) -> bool {
    romaji
        .chars()
        .next()
        .is_some_and(|c| matches!(c, 'a' | 'i' | 'u' | 'e' | 'o' | 'y'))
}

/// Romanize kana with the global table and the `[romanize]` settings.
///
/// Katakana is folded to hiragana first, so both scripts are accepted.
pub fn kana_to_romaji(kana: &str) -> String {
    romanize_with(
        KanaTable::global(),
        kana,
        settings().romanize.hatsuon_apostrophe,
    )
}

/// Romanize kana with an explicit table.
///
/// っ doubles the first consonant of the following mora ("ch" becomes
/// "tch"); a っ with no consonant after it is dropped. With
/// `hatsuon_apostrophe`, ん before a vowel or "y" is written "n'".
/// Characters missing from the table are copied through unchanged.
pub fn romanize_with(table: &KanaTable, kana: &str, hatsuon_apostrophe: bool) -> String {
    let hira = katakana_to_hiragana(kana);
    let mut out = String::with_capacity(hira.len());
    let mut rest = hira.as_str();
    let mut sokuon = false;

    while let Some(ch) = rest.chars().next() {
        if ch == 'っ' {
            sokuon = true;
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let (len, romaji) = match table.longest_match(rest) {
            Some(m) => m,
            None => {
                let len = ch.len_utf8();
                (len, &rest[..len])
            }
        };

        if sokuon {
            if romaji.starts_with("ch") {
                out.push('t');
            } else if starts_with_consonant(romaji) {
                out.extend(romaji.chars().next());
            }
            sokuon = false;
        }

        out.push_str(romaji);
        rest = &rest[len..];

        if hatsuon_apostrophe && ch == 'ん' && len == ch.len_utf8() {
            if let Some((_, next)) = table.longest_match(rest) {
                if starts_with_vowel_or_y(next) {
                    out.push('\'');
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn romanize(kana: &str) -> String {
        romanize_with(KanaTable::global(), kana, false)
    }

    #[test]
    fn test_basic() {
        assert_eq!(romanize("こんにちは"), "konnichiha");
        assert_eq!(romanize("ねこ"), "neko");
        assert_eq!(romanize("たべます"), "tabemasu");
    }

    #[test]
    fn test_katakana_input() {
        assert_eq!(romanize("コンニチハ"), "konnichiha");
        assert_eq!(romanize("ラーメン"), "ra-men");
    }

    #[test]
    fn test_youon() {
        assert_eq!(romanize("きょうと"), "kyouto");
        assert_eq!(romanize("しゃしん"), "shashin");
        assert_eq!(romanize("ちゃ"), "cha");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(romanize("きって"), "kitte");
        assert_eq!(romanize("がっこう"), "gakkou");
        assert_eq!(romanize("まっちゃ"), "matcha");
        assert_eq!(romanize("ざっし"), "zasshi");
        assert_eq!(romanize("あっ"), "a");
    }

    #[test]
    fn test_hatsuon_apostrophe() {
        let table = KanaTable::global();
        assert_eq!(romanize_with(table, "ほんや", false), "honya");
        assert_eq!(romanize_with(table, "ほんや", true), "hon'ya");
        assert_eq!(romanize_with(table, "きんえん", true), "kin'en");
        assert_eq!(romanize_with(table, "しんぶん", true), "shinbun");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(romanize(""), "");
        assert_eq!(romanize("。"), "。");
        assert_eq!(romanize("abc"), "abc");
        assert_eq!(romanize("猫が"), "猫ga");
    }

    #[test]
    fn test_global_entry_point() {
        assert_eq!(kana_to_romaji("スシ"), "sushi");
    }
}
