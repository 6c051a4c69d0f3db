pub(crate) const DEFAULT_KANA_TOML: &str = include_str!("default_kana.toml");
pub(crate) const DEFAULT_ROMAJI_TOML: &str = include_str!("default_romaji.toml");

/// Returns the embedded kana-to-romaji table.
pub fn default_kana_toml() -> &'static str {
    DEFAULT_KANA_TOML
}

/// Returns the embedded romaji-to-kana table.
pub fn default_romaji_toml() -> &'static str {
    DEFAULT_ROMAJI_TOML
}
