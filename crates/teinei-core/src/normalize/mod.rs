//! Polite-form (-ます) normalization of verb tokens.
//!
//! Verbs are rewritten by surface substitution driven by an ordered rule
//! list (see `[[politeness.rules]]` in the settings). Only the token's
//! part-of-speech category is consulted, never its raw tags.

mod rules;

use tracing::{debug_span, trace};

use crate::settings::{settings, RuleSpec};
use crate::token::Token;

pub use rules::{build_rule, ExactRule, Rule, SuffixRule};

pub struct PoliteNormalizer {
    rules: Vec<Box<dyn Rule>>,
}

impl PoliteNormalizer {
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn from_specs(specs: &[RuleSpec]) -> Self {
        Self::new(specs.iter().map(build_rule).collect())
    }

    /// Normalizer using the rules from the global settings.
    pub fn from_settings() -> Self {
        Self::from_specs(&settings().politeness.rules)
    }

    /// Polite surface for one token. Non-verbs and verbs no rule matches
    /// are returned unchanged.
    pub fn rewrite<'t>(&self, token: &'t Token) -> std::borrow::Cow<'t, str> {
        if !token.pos.is_verb() {
            return token.surface.as_str().into();
        }
        match rules::first_match(&self.rules, &token.surface) {
            Some(polite) => {
                trace!(surface = %token.surface, polite = %polite, "rewrote verb");
                polite.into()
            }
            None => token.surface.as_str().into(),
        }
    }

    /// Rewrite every verb token and concatenate all surfaces in order.
    pub fn normalize(&self, tokens: &[Token]) -> String {
        let _span = debug_span!("normalize", tokens = tokens.len()).entered();
        let mut out = String::new();
        for token in tokens {
            out.push_str(&self.rewrite(token));
        }
        out
    }
}

impl Default for PoliteNormalizer {
    fn default() -> Self {
        Self::from_settings()
    }
}

/// Normalize with the rules from the global settings.
pub fn normalize(tokens: &[Token]) -> String {
    PoliteNormalizer::from_settings().normalize(tokens)
}
