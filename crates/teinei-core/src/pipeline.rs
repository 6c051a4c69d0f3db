//! End-to-end analysis: optional romaji input, polite normalization, annotation.
//!
//! The analyzer is passed in as a [`Tokenizer`] handle; the pipeline holds no
//! global analyzer state.

use serde::Serialize;
use tracing::{debug, debug_span};

use crate::normalize::PoliteNormalizer;
use crate::romaji::romaji_to_kana;
use crate::settings::settings;
use crate::tokenizer::{TokenizeError, Tokenizer};
use crate::transliterate::{Assembler, BreakdownEntry};
use crate::unicode::looks_like_romaji;

/// Where the Japanese text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    /// Written by the user in Japanese, or typed as romaji.
    Japanese,
    /// Produced by machine translation into Japanese; verbs are made polite.
    Translated,
}

/// Result of [`Pipeline::analyze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The text that was annotated, after romaji conversion or normalization.
    pub japanese_text: String,
    pub romaji: String,
    pub breakdown: Vec<BreakdownEntry>,
}

pub struct Pipeline<'a> {
    tokenizer: &'a dyn Tokenizer,
    normalizer: PoliteNormalizer,
    assembler: Assembler<'static>,
    romaji_detection: bool,
}

impl<'a> Pipeline<'a> {
    /// Pipeline configured from the global settings and kana table.
    pub fn new(tokenizer: &'a dyn Tokenizer) -> Self {
        Self {
            tokenizer,
            normalizer: PoliteNormalizer::from_settings(),
            assembler: Assembler::default(),
            romaji_detection: settings().input.romaji_detection,
        }
    }

    pub fn with_normalizer(mut self, normalizer: PoliteNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_romaji_detection(mut self, enabled: bool) -> Self {
        self.romaji_detection = enabled;
        self
    }

    /// Text to analyze before any tokenization.
    fn prepare(&self, text: &str, origin: TextOrigin) -> String {
        if origin == TextOrigin::Japanese && self.romaji_detection && looks_like_romaji(text) {
            let kana = romaji_to_kana(text);
            debug!(input = text, kana = %kana, "treating input as romaji");
            return kana;
        }
        text.to_string()
    }

    /// Normalize (for translated text) and annotate `text`.
    ///
    /// Translated text is tokenized, normalized to the polite form, then
    /// tokenized again so readings match the rewritten surfaces. Normalization
    /// runs once; the rewritten text is not normalized again.
    pub fn analyze(&self, text: &str, origin: TextOrigin) -> Result<Analysis, TokenizeError> {
        let _span = debug_span!("analyze", ?origin, len = text.len()).entered();
        let mut japanese_text = self.prepare(text, origin);

        if origin == TextOrigin::Translated {
            let tokens = self.tokenizer.tokenize(&japanese_text)?;
            japanese_text = self.normalizer.normalize(&tokens);
        }

        let tokens = self.tokenizer.tokenize(&japanese_text)?;
        let result = self.assembler.assemble(&tokens);
        Ok(Analysis {
            japanese_text,
            romaji: result.romaji_joined,
            breakdown: result.breakdown,
        })
    }
}
