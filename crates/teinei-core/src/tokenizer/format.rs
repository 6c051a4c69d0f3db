use tracing::debug;

use super::{PosMap, TokenizeError};
use crate::token::Token;

/// A pluggable analyzer output format, one token per line.
pub trait AnalyzerFormat {
    fn name(&self) -> &'static str;

    /// Parse one line. `Ok(None)` skips the line (sentence markers, blanks).
    fn parse_line(&self, line: &str, pos_map: &PosMap) -> Result<Option<Token>, String>;

    /// Parse a whole analyzer output into tokens, in order.
    fn parse(&self, output: &str, pos_map: &PosMap) -> Result<Vec<Token>, TokenizeError> {
        let mut tokens = Vec::new();
        let mut skipped = 0usize;
        for (i, line) in output.lines().enumerate() {
            match self.parse_line(line, pos_map) {
                Ok(Some(token)) => tokens.push(token),
                Ok(None) => skipped += 1,
                Err(reason) => return Err(TokenizeError::Parse { line: i + 1, reason }),
            }
        }
        debug!(format = self.name(), tokens = tokens.len(), skipped, "parsed analyzer output");
        Ok(tokens)
    }
}

fn is_marker(line: &str) -> bool {
    line.is_empty() || line == "EOS"
}

/// `*` and the empty string both mean "no reading".
fn reading_field(field: Option<&str>) -> Option<String> {
    field
        .filter(|r| !r.is_empty() && *r != "*")
        .map(str::to_string)
}

fn split_tags(field: &str, max: usize) -> Vec<String> {
    field.split(',').take(max).map(str::to_string).collect()
}

/// Sudachi output (`sudachi -a` / `sudachipy -a`).
///
/// Tab-separated: surface(0), POS(1, six comma-separated fields),
/// normalized form(2), dictionary form(3), reading(4), dictionary id(5), ...
/// Without `-a` only the first three columns are present and readings are absent.
pub struct SudachiFormat;

impl AnalyzerFormat for SudachiFormat {
    fn name(&self) -> &'static str {
        "sudachi"
    }

    fn parse_line(&self, line: &str, pos_map: &PosMap) -> Result<Option<Token>, String> {
        if is_marker(line) {
            return Ok(None);
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            return Err(format!("expected at least 2 tab-separated fields: {line:?}"));
        }
        let pos = pos_map.part_of_speech(split_tags(fields[1], 6));
        Ok(Some(Token::new(
            fields[0],
            pos,
            reading_field(fields.get(4).copied()),
        )))
    }
}

/// MeCab output with an IPADIC-style feature string.
///
/// `surface TAB pos1,pos2,pos3,pos4,conj_type,conj_form,base,reading,pronunciation`.
/// Unknown words carry only the first seven features and get no reading.
pub struct MecabFormat;

impl AnalyzerFormat for MecabFormat {
    fn name(&self) -> &'static str {
        "mecab"
    }

    fn parse_line(&self, line: &str, pos_map: &PosMap) -> Result<Option<Token>, String> {
        if is_marker(line) {
            return Ok(None);
        }
        let (surface, features) = line
            .split_once('\t')
            .ok_or_else(|| format!("missing feature column: {line:?}"))?;
        let pos = pos_map.part_of_speech(split_tags(features, 6));
        let reading = reading_field(features.split(',').nth(7));
        Ok(Some(Token::new(surface, pos, reading)))
    }
}

/// One JSON-serialized [`Token`] per line.
///
/// When a token carries raw tags they are re-classified with the active
/// [`PosMap`]; a bare `category` is kept as given.
pub struct JsonlFormat;

impl AnalyzerFormat for JsonlFormat {
    fn name(&self) -> &'static str {
        "jsonl"
    }

    fn parse_line(&self, line: &str, pos_map: &PosMap) -> Result<Option<Token>, String> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        let mut token: Token = serde_json::from_str(line).map_err(|e| e.to_string())?;
        if !token.pos.tags.is_empty() {
            token.pos.category = pos_map.classify(&token.pos.tags);
        }
        Ok(Some(token))
    }
}

/// Create an `AnalyzerFormat` by name.
pub fn from_name(name: &str) -> Result<Box<dyn AnalyzerFormat + Send + Sync>, TokenizeError> {
    match name {
        "sudachi" => Ok(Box::new(SudachiFormat)),
        "mecab" => Ok(Box::new(MecabFormat)),
        "jsonl" => Ok(Box::new(JsonlFormat)),
        _ => Err(TokenizeError::UnknownFormat(name.to_string())),
    }
}
