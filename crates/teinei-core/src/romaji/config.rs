use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct MappingTable {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("invalid key: {0}")]
    InvalidKey(String),
    #[error("invalid value for key {key}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("table already initialized")]
    AlreadyInitialized,
}

fn parse_mappings(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let table: MappingTable =
        toml::from_str(toml_str).map_err(|e| TableError::Parse(e.to_string()))?;
    if table.mappings.is_empty() {
        return Err(TableError::Empty);
    }
    Ok(table.mappings)
}

/// Parse a romaji-to-kana table into a sorted `BTreeMap<romaji, kana>`.
///
/// Keys must be non-empty ASCII, values non-empty.
pub fn parse_romaji_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let mappings = parse_mappings(toml_str)?;
    for (key, value) in &mappings {
        if key.is_empty() || !key.is_ascii() {
            return Err(TableError::InvalidKey(key.clone()));
        }
        if value.is_empty() {
            return Err(TableError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(mappings)
}

/// Parse a kana-to-romaji table into a sorted `BTreeMap<kana, romaji>`.
///
/// Keys must be hiragana (ー allowed), values non-empty ASCII.
pub fn parse_kana_toml(toml_str: &str) -> Result<BTreeMap<String, String>, TableError> {
    let mappings = parse_mappings(toml_str)?;
    for (key, value) in &mappings {
        if !crate::unicode::is_hiragana_reading(key) {
            return Err(TableError::InvalidKey(key.clone()));
        }
        if value.is_empty() || !value.is_ascii() {
            return Err(TableError::InvalidValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }
    Ok(mappings)
}
