use crate::settings::{RuleKind, RuleSpec};

/// A surface rewrite applied to verb tokens.
///
/// `rewrite` returns `None` when the rule does not match, so a rule is both
/// its match predicate and its rewrite function.
pub trait Rule: Send + Sync {
    fn rewrite(&self, surface: &str) -> Option<String>;
}

/// Replaces a surface that equals `pattern` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactRule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule for ExactRule {
    fn rewrite(&self, surface: &str) -> Option<String> {
        (surface == self.pattern).then(|| self.replacement.clone())
    }
}

/// Replaces a trailing `pattern` with `replacement`, keeping the stem.
///
/// Example: `食べる` → `食べます` with pattern "る" and replacement "ます".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    pub pattern: String,
    pub replacement: String,
}

impl Rule for SuffixRule {
    fn rewrite(&self, surface: &str) -> Option<String> {
        let stem = surface.strip_suffix(self.pattern.as_str())?;
        let mut out = String::with_capacity(stem.len() + self.replacement.len());
        out.push_str(stem);
        out.push_str(&self.replacement);
        Some(out)
    }
}

/// Build a boxed rule from its settings entry.
pub fn build_rule(spec: &RuleSpec) -> Box<dyn Rule> {
    match spec.kind {
        RuleKind::Exact => Box::new(ExactRule {
            pattern: spec.pattern.clone(),
            replacement: spec.replacement.clone(),
        }),
        RuleKind::Suffix => Box::new(SuffixRule {
            pattern: spec.pattern.clone(),
            replacement: spec.replacement.clone(),
        }),
    }
}

/// Apply the first matching rule, in order.
pub(crate) fn first_match(rules: &[Box<dyn Rule>], surface: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule.rewrite(surface))
}
