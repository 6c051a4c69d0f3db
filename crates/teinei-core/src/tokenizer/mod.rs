//! The analyzer boundary.
//!
//! Morphological analysis itself happens elsewhere; this module defines the
//! [`Tokenizer`] handle the pipeline is given, the error it may return, and
//! parsers that turn common analyzer output formats into [`Token`]s.

pub mod format;
mod pos_map;

use std::io;

use crate::token::Token;

pub use format::{from_name, AnalyzerFormat, JsonlFormat, MecabFormat, SudachiFormat};
pub use pos_map::PosMap;

/// Splits text into an ordered, contiguous token sequence.
///
/// Implementations must return tokens in document order whose surfaces
/// concatenate back to `text`, with the part-of-speech category resolved.
pub trait Tokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError>;
}

impl<T: Tokenizer + ?Sized> Tokenizer for &T {
    fn tokenize(&self, text: &str) -> Result<Vec<Token>, TokenizeError> {
        (**self).tokenize(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizeError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("analyzer command failed: {0}")]
    Command(String),

    #[error("unknown analyzer format: {0}")]
    UnknownFormat(String),
}
