//! Post-processing for tokenized Japanese text.
//!
//! Takes the token stream produced by an external morphological analyzer and
//! rewrites verbs into the polite (-ます) register, or annotates every token
//! with a hiragana reading and a Hepburn romanization.

pub mod normalize;
pub mod numeric;
pub mod pipeline;
pub mod romaji;
pub mod settings;
pub mod token;
pub mod tokenizer;
pub mod transliterate;
pub mod unicode;

pub(crate) mod testutil;

pub use normalize::{normalize, PoliteNormalizer};
pub use numeric::is_numeric;
pub use pipeline::{Analysis, Pipeline, TextOrigin};
pub use token::{PartOfSpeech, PosCategory, Token};
pub use tokenizer::{TokenizeError, Tokenizer};
pub use transliterate::{assemble, BreakdownEntry, TransliterationResult};
