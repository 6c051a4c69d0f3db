//! Global settings loaded from TOML, following the same OnceLock pattern as the kana tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use crate::token::PosCategory;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub pos: PosSettings,
    pub politeness: PolitenessSettings,
    pub romanize: RomanizeSettings,
    pub input: InputSettings,
}

/// First-field part-of-speech tags per category.
#[derive(Debug, Clone, Deserialize)]
pub struct PosSettings {
    pub verb: Vec<String>,
    #[serde(default)]
    pub noun: Vec<String>,
    #[serde(default)]
    pub adjective: Vec<String>,
    #[serde(default)]
    pub particle: Vec<String>,
    #[serde(default)]
    pub auxiliary: Vec<String>,
    #[serde(default)]
    pub symbol: Vec<String>,
}

impl PosSettings {
    /// Flatten into a tag → category table.
    pub fn tag_table(&self) -> HashMap<String, PosCategory> {
        self.categories()
            .flat_map(|(category, tags)| tags.iter().map(move |t| (t.clone(), category)))
            .collect()
    }

    fn categories(&self) -> impl Iterator<Item = (PosCategory, &Vec<String>)> {
        [
            (PosCategory::Verb, &self.verb),
            (PosCategory::Noun, &self.noun),
            (PosCategory::Adjective, &self.adjective),
            (PosCategory::Particle, &self.particle),
            (PosCategory::Auxiliary, &self.auxiliary),
            (PosCategory::Symbol, &self.symbol),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PolitenessSettings {
    pub rules: Vec<RuleSpec>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Whole surface equals `pattern`.
    Exact,
    /// Surface ends with `pattern`; only that suffix is replaced.
    Suffix,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RuleSpec {
    pub kind: RuleKind,
    pub pattern: String,
    pub replacement: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomanizeSettings {
    pub separator: String,
    #[serde(default)]
    pub hatsuon_apostrophe: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputSettings {
    pub romaji_detection: bool,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: impl Into<String>, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.into(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.pos.verb.is_empty() {
        return Err(invalid("pos.verb", "must list at least one tag"));
    }

    let mut seen: HashMap<&str, PosCategory> = HashMap::new();
    for (category, tags) in s.pos.categories() {
        for tag in tags {
            if tag.is_empty() {
                return Err(invalid(format!("pos.{category:?}"), "tags must be non-empty"));
            }
            if let Some(prev) = seen.insert(tag, category) {
                return Err(invalid(
                    format!("pos.{category:?}"),
                    &format!("tag {tag:?} already assigned to {prev:?}"),
                ));
            }
        }
    }

    for (i, rule) in s.politeness.rules.iter().enumerate() {
        if rule.pattern.is_empty() {
            return Err(invalid(
                format!("politeness.rules[{i}].pattern"),
                "must be non-empty",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.pos.verb, vec!["動詞"]);
        assert_eq!(s.politeness.rules.len(), 3);
        assert_eq!(s.politeness.rules[0].kind, RuleKind::Exact);
        assert_eq!(s.politeness.rules[2].kind, RuleKind::Suffix);
        assert_eq!(s.romanize.separator, " ");
        assert!(!s.romanize.hatsuon_apostrophe);
        assert!(s.input.romaji_detection);
    }

    #[test]
    fn global_settings_use_defaults() {
        assert_eq!(settings().romanize.separator, " ");
    }

    #[test]
    fn tag_table_resolves_categories() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        let table = s.pos.tag_table();
        assert_eq!(table.get("動詞"), Some(&PosCategory::Verb));
        assert_eq!(table.get("補助記号"), Some(&PosCategory::Symbol));
        assert_eq!(table.get("感動詞"), None);
    }

    fn with_replaced(from: &str, to: &str) -> String {
        assert!(DEFAULT_SETTINGS_TOML.contains(from), "missing {from}");
        DEFAULT_SETTINGS_TOML.replacen(from, to, 1)
    }

    #[test]
    fn error_empty_verb_tags() {
        let toml = with_replaced("verb = [\"動詞\"]", "verb = []");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "pos.verb"));
    }

    #[test]
    fn error_duplicate_tag() {
        let toml = with_replaced("particle = [\"助詞\"]", "particle = [\"動詞\"]");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
    }

    #[test]
    fn error_empty_rule_pattern() {
        let toml = with_replaced("pattern = \"る\"", "pattern = \"\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(
            matches!(err, SettingsError::InvalidValue { ref field, .. } if field == "politeness.rules[2].pattern")
        );
    }

    #[test]
    fn error_unknown_rule_kind() {
        let toml = with_replaced("kind = \"suffix\"", "kind = \"regex\"");
        let err = parse_settings_toml(&toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn empty_rule_list_is_allowed() {
        let toml = r#"
[pos]
verb = ["動詞"]

[politeness]
rules = []

[romanize]
separator = "/"

[input]
romaji_detection = false
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert!(s.politeness.rules.is_empty());
        assert!(s.pos.noun.is_empty());
        assert_eq!(s.romanize.separator, "/");
    }
}
