//! Token model shared by the normalizer, the assembler and the analyzer adapters.

use serde::{Deserialize, Serialize};

/// Coarse part-of-speech class resolved from an analyzer's tag vocabulary.
///
/// The normalizer and the assembler only ever look at this category, never at
/// the raw tag strings, so any analyzer can be plugged in through a [`PosMap`].
///
/// [`PosMap`]: crate::tokenizer::PosMap
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PosCategory {
    Verb,
    Noun,
    Adjective,
    Particle,
    Auxiliary,
    Symbol,
    #[default]
    Other,
}

/// Part-of-speech tags as reported by the analyzer, plus the resolved category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartOfSpeech {
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: PosCategory,
}

impl PartOfSpeech {
    pub fn new(tags: Vec<String>, category: PosCategory) -> Self {
        Self { tags, category }
    }

    /// Category only, no raw tags.
    pub fn from_category(category: PosCategory) -> Self {
        Self {
            tags: Vec::new(),
            category,
        }
    }

    pub fn is_verb(&self) -> bool {
        self.category == PosCategory::Verb
    }
}

/// A contiguous span of analyzed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub surface: String,
    #[serde(default)]
    pub pos: PartOfSpeech,
    /// Katakana reading; absent for symbols and unknown foreign text.
    #[serde(default)]
    pub reading: Option<String>,
}

impl Token {
    pub fn new(surface: impl Into<String>, pos: PartOfSpeech, reading: Option<String>) -> Self {
        Self {
            surface: surface.into(),
            pos,
            reading,
        }
    }

    /// Reading or the empty string.
    pub fn reading_or_empty(&self) -> &str {
        self.reading.as_deref().unwrap_or("")
    }
}

/// Concatenate token surfaces in order. For a well-formed token stream this
/// reproduces the analyzed text.
pub fn join_surfaces(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.surface.as_str()).collect()
}
