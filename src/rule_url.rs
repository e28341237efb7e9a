//! Documentation links for ESLint rules

use crate::config::DEFAULT_RULE_URL_BASE;

/// Resolves rule ids to documentation URLs.
///
/// Only core rules are resolved; plugin rules (`plugin/rule`) have no
/// common documentation root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleUrlResolver {
    base: String,
}

impl RuleUrlResolver {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn resolve(&self, rule: &str) -> Option<String> {
        let rule = rule.trim();
        if rule.is_empty() || rule.contains('/') || self.base.trim().is_empty() {
            return None;
        }

        Some(format!("{}{}", self.base, rule))
    }
}

impl Default for RuleUrlResolver {
    fn default() -> Self {
        Self::new(DEFAULT_RULE_URL_BASE)
    }
}
