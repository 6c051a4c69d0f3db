use super::trie::RomajiTrie;

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

fn is_consonant(ch: char) -> bool {
    ch.is_ascii_lowercase() && !is_vowel(ch)
}

/// Convert romaji text to hiragana using the global romaji table.
///
/// Input is lowercased first. Characters with no mapping (digits, spaces,
/// punctuation missing from the table) are copied through unchanged.
pub fn romaji_to_kana(input: &str) -> String {
    romaji_to_kana_with(RomajiTrie::global(), input)
}

/// Convert romaji text to hiragana with an explicit table.
///
/// Besides table lookups (longest match wins), two spellings are resolved
/// here rather than in the table:
/// - sokuon: a doubled consonant other than "n", or "t" before "ch", emits っ;
/// - hatsuon: "n" before a consonant, at the end of input, or as the first
///   half of "nn" followed by a vowel or "y" emits ん.
pub fn romaji_to_kana_with(trie: &RomajiTrie, input: &str) -> String {
    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(lower.len() * 2);
    let mut rest = lower.as_str();

    while let Some(ch) = rest.chars().next() {
        let after = &rest[ch.len_utf8()..];
        let next = after.chars().next();

        let doubled = next == Some(ch) || (ch == 't' && after.starts_with("ch"));
        if is_consonant(ch) && ch != 'n' && doubled {
            out.push('っ');
            rest = after;
            continue;
        }

        if ch == 'n' {
            let hatsuon = match next {
                None => true,
                // konnichiwa: the second "n" starts the next mora
                Some('n') => after[1..].starts_with(|c: char| is_vowel(c) || c == 'y'),
                Some(c) => is_consonant(c) && c != 'y',
            };
            if hatsuon {
                out.push('ん');
                rest = after;
                continue;
            }
        }

        if let Some((len, kana)) = trie.longest_match(rest) {
            out.push_str(kana);
            rest = &rest[len..];
            continue;
        }

        out.push(ch);
        rest = after;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_words() {
        assert_eq!(romaji_to_kana("sushi"), "すし");
        assert_eq!(romaji_to_kana("arigatou"), "ありがとう");
        assert_eq!(romaji_to_kana("kyou"), "きょう");
    }

    #[test]
    fn test_uppercase_is_folded() {
        assert_eq!(romaji_to_kana("Tokyo"), "ときょ");
        assert_eq!(romaji_to_kana("SUSHI"), "すし");
    }

    #[test]
    fn test_sokuon() {
        assert_eq!(romaji_to_kana("kitte"), "きって");
        assert_eq!(romaji_to_kana("gakkou"), "がっこう");
        assert_eq!(romaji_to_kana("matcha"), "まっちゃ");
    }

    #[test]
    fn test_hatsuon() {
        assert_eq!(romaji_to_kana("shinbun"), "しんぶん");
        assert_eq!(romaji_to_kana("konnichiwa"), "こんにちわ");
        assert_eq!(romaji_to_kana("konnnichiwa"), "こんにちわ");
        assert_eq!(romaji_to_kana("hon'ya"), "ほんや");
        assert_eq!(romaji_to_kana("hon"), "ほん");
        assert_eq!(romaji_to_kana("nn"), "ん");
    }

    #[test]
    fn test_na_row_not_hatsuon() {
        assert_eq!(romaji_to_kana("nani"), "なに");
        assert_eq!(romaji_to_kana("kinyoubi"), "きにょうび");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(romaji_to_kana("ichi 2 san"), "いち 2 さん");
        assert_eq!(romaji_to_kana(""), "");
        assert_eq!(romaji_to_kana("q"), "q");
    }

    #[test]
    fn test_custom_table() {
        let trie = RomajiTrie::from_toml("[mappings]\nka = \"カ\"\n").unwrap();
        assert_eq!(romaji_to_kana_with(&trie, "kaka"), "カカ");
        assert_eq!(romaji_to_kana_with(&trie, "kakka"), "カっカ");
    }
}
