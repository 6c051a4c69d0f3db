//! Per-token reading annotation: furigana (hiragana) and romaji.

use serde::{Deserialize, Serialize};
use tracing::debug_span;

use crate::numeric::is_numeric;
use crate::romaji::{romanize_with, KanaTable};
use crate::settings::{settings, RomanizeSettings};
use crate::token::Token;
use crate::unicode::katakana_to_hiragana;

/// Annotation for one token. Numeric tokens carry empty `furigana` and `romaji`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub surface: String,
    pub furigana: String,
    pub romaji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliterationResult {
    pub breakdown: Vec<BreakdownEntry>,
    /// Per-token romaji (or the raw surface for numeric tokens), joined by the separator.
    #[serde(rename = "romaji")]
    pub romaji_joined: String,
}

/// Builds [`TransliterationResult`]s from token sequences.
pub struct Assembler<'a> {
    table: &'a KanaTable,
    separator: &'a str,
    hatsuon_apostrophe: bool,
}

impl<'a> Assembler<'a> {
    pub fn new(table: &'a KanaTable, romanize: &'a RomanizeSettings) -> Self {
        Self {
            table,
            separator: &romanize.separator,
            hatsuon_apostrophe: romanize.hatsuon_apostrophe,
        }
    }

    /// Annotate one token, returning the entry and its contribution to the joined romaji.
    fn entry<'t>(&self, token: &'t Token) -> (BreakdownEntry, Option<&'t str>) {
        if is_numeric(&token.surface) {
            let entry = BreakdownEntry {
                surface: token.surface.clone(),
                furigana: String::new(),
                romaji: String::new(),
            };
            return (entry, Some(token.surface.as_str()));
        }
        let furigana = katakana_to_hiragana(token.reading_or_empty());
        let romaji = romanize_with(self.table, &furigana, self.hatsuon_apostrophe);
        let entry = BreakdownEntry {
            surface: token.surface.clone(),
            furigana,
            romaji,
        };
        (entry, None)
    }

    pub fn assemble(&self, tokens: &[Token]) -> TransliterationResult {
        let _span = debug_span!("assemble", tokens = tokens.len()).entered();
        let mut breakdown = Vec::with_capacity(tokens.len());
        let mut parts: Vec<String> = Vec::with_capacity(tokens.len());
        for token in tokens {
            let (entry, passthrough) = self.entry(token);
            parts.push(passthrough.map_or_else(|| entry.romaji.clone(), str::to_string));
            breakdown.push(entry);
        }
        TransliterationResult {
            breakdown,
            romaji_joined: parts.join(self.separator),
        }
    }
}

impl Default for Assembler<'static> {
    fn default() -> Self {
        Self::new(KanaTable::global(), &settings().romanize)
    }
}

/// Annotate tokens with the global kana table and settings.
pub fn assemble(tokens: &[Token]) -> TransliterationResult {
    Assembler::default().assemble(tokens)
}
