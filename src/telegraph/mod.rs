// WHY: rules are validated once up front so per-call normalization stays infallible

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod char_class;
pub mod normalization;

// Re-export core types
pub use char_class::{CharClass, DEFAULT_PERIOD_ALIASES};
pub use normalization::{
    telegraph_style, telegraph_style_into, telegraph_style_with, TELEGRAPH_TERMINATOR,
};

/// Configuration for telegraph-style normalization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelegraphRules {
    /// Characters rewritten to a period
    pub period_aliases: Vec<char>,
    /// Literal the output must end with
    pub terminator: String,
}

impl Default for TelegraphRules {
    fn default() -> Self {
        Self {
            period_aliases: DEFAULT_PERIOD_ALIASES.to_vec(),
            terminator: TELEGRAPH_TERMINATOR.to_string(),
        }
    }
}

impl TelegraphRules {
    /// Check that normalized output under these rules is stable when normalized again
    pub fn validate(&self) -> Result<()> {
        if self.terminator.is_empty() {
            bail!("terminator must not be empty");
        }

        // WHY: terminator characters must pass through unchanged or re-normalizing would append it twice
        if let Some(bad) = self
            .terminator
            .chars()
            .find(|&ch| ch == ' ' || !CharClass::is_retained_as_is(ch))
        {
            bail!(
                "terminator {:?} contains {:?}; only upper-case ASCII letters, digits and '.' are allowed",
                self.terminator,
                bad
            );
        }

        if let Some(bad) = self
            .period_aliases
            .iter()
            .find(|&&ch| CharClass::is_retained_as_is(ch) || ch.is_ascii_lowercase())
        {
            bail!("period alias {bad:?} is already a retained character");
        }

        Ok(())
    }

    /// Parse rules from JSON and validate them
    ///
    /// Missing fields fall back to the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let rules: Self =
            serde_json::from_str(json).context("failed to parse telegraph rules JSON")?;
        rules.validate().context("invalid telegraph rules")?;
        Ok(rules)
    }
}

/// Telegraph normalizer bound to a validated rule set
#[derive(Debug, Clone)]
pub struct Telegrapher {
    rules: TelegraphRules,
}

impl Telegrapher {
    /// Create a normalizer with custom rules
    pub fn new(rules: TelegraphRules) -> Result<Self> {
        rules.validate()?;
        debug!(?rules, "telegraph rules accepted");
        Ok(Self { rules })
    }

    /// Create a normalizer with the default rules
    pub fn with_default_rules() -> Self {
        Self {
            rules: TelegraphRules::default(),
        }
    }

    /// Rules this normalizer applies
    pub fn rules(&self) -> &TelegraphRules {
        &self.rules
    }

    /// Normalize with new allocation
    pub fn normalize(&self, s: &str) -> String {
        telegraph_style_with(s, &self.rules)
    }

    /// Normalize into supplied buffer (zero allocation once the buffer has grown)
    pub fn normalize_into(&self, s: &str, buffer: &mut String) {
        normalization::normalize_into(
            s,
            &self.rules.period_aliases,
            &self.rules.terminator,
            buffer,
        );
    }
}

impl Default for Telegrapher {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
