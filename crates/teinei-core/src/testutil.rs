#![cfg(test)]

use crate::token::{PartOfSpeech, PosCategory, Token};
use crate::tokenizer::{TokenizeError, Tokenizer};
use crate::unicode::is_fullwidth_digit;

/// Greedy longest-match tokenizer over a fixed word list.
///
/// Runs of digits (with `.`, `,`, `．`, `・` inside) become one token without
/// a reading; any other unknown character becomes a single `Other` token.
/// Surfaces always concatenate back to the input.
pub struct LexiconTokenizer {
    entries: Vec<(String, PosCategory, String)>,
}

impl LexiconTokenizer {
    pub fn new(entries: &[(&str, PosCategory, &str)]) -> Self {
        let mut entries: Vec<(String, PosCategory, String)> = entries
            .iter()
            .map(|&(s, c, r)| (s.to_string(), c, r.to_string()))
            .collect();
        // Longest surface first so the first hit is the longest match.
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    fn digit_run(rest: &str) -> usize {
        let mut len = 0;
        for (i, c) in rest.char_indices() {
            let is_digit = c.is_ascii_digit() || is_fullwidth_digit(c);
            let is_sep = i > 0 && matches!(c, '.' | ',' | '．' | '・');
            if !(is_digit || is_sep) {
                break;
            }
            len = i + c.len_utf8();
        }
        len
    }
}

impl Tokenizer for LexiconTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut rest = text;
        while let Some(ch) = rest.chars().next() {
            let digits = Self::digit_run(rest);
            let token = if digits > 0 {
                Token::new(
                    &rest[..digits],
                    PartOfSpeech::from_category(PosCategory::Noun),
                    None,
                )
            } else if let Some((surface, category, reading)) =
                self.entries.iter().find(|(s, _, _)| rest.starts_with(s.as_str()))
            {
                Token::new(
                    surface.as_str(),
                    PartOfSpeech::from_category(*category),
                    Some(reading.clone()),
                )
            } else {
                Token::new(
                    &rest[..ch.len_utf8()],
                    PartOfSpeech::from_category(PosCategory::Other),
                    None,
                )
            };
            rest = &rest[token.surface.len()..];
            tokens.push(token);
        }
        Ok(tokens)
    }
}

/// Shared test lexicon covering plain and polite verb forms.
pub fn test_tokenizer() -> LexiconTokenizer {
    use PosCategory::*;
    LexiconTokenizer::new(&[
        ("猫", Noun, "ネコ"),
        ("魚", Noun, "サカナ"),
        ("私", Noun, "ワタシ"),
        ("今日", Noun, "キョウ"),
        ("価格", Noun, "カカク"),
        ("円", Noun, "エン"),
        ("学校", Noun, "ガッコウ"),
        ("こんにちは", Other, "コンニチハ"),
        ("が", Particle, "ガ"),
        ("を", Particle, "ヲ"),
        ("は", Particle, "ハ"),
        ("に", Particle, "ニ"),
        ("食べる", Verb, "タベル"),
        ("食べ", Verb, "タベ"),
        ("見る", Verb, "ミル"),
        ("見", Verb, "ミ"),
        ("する", Verb, "スル"),
        ("し", Verb, "シ"),
        ("くる", Verb, "クル"),
        ("き", Verb, "キ"),
        ("行く", Verb, "イク"),
        ("ます", Auxiliary, "マス"),
        ("。", Symbol, "。"),
    ])
}

/// Build a token with a category and katakana reading.
pub fn token(surface: &str, category: PosCategory, reading: Option<&str>) -> Token {
    Token::new(
        surface,
        PartOfSpeech::from_category(category),
        reading.map(str::to_string),
    )
}
