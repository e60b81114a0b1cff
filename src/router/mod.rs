//! Intent router
//!
//! Normalizes a query and walks the ordered rule table; the first rule that
//! matches decides the [`Intent`]. The router does no I/O.

pub mod rules;
pub mod types;

pub use rules::{standard_rules, MatchRule, Matcher};
pub use types::{Intent, Target};

use crate::errors::Result;
use tracing::debug;

/// A query in both its original and normalized forms
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery<'a> {
    original: &'a str,
    normalized: String,
    prompt_len: usize,
    original_prompt_len: usize,
}

impl<'a> NormalizedQuery<'a> {
    /// Lower-case, unify apostrophes and collapse whitespace.
    ///
    /// The prompt is the text before any JSON payload, so rules never match
    /// inside structured data. Lower-casing can change byte lengths, so the
    /// cut is located separately in each form.
    pub fn new(original: &'a str) -> Self {
        let normalized = original
            .to_lowercase()
            .replace('\u{2019}', "'")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        let prompt_len = payload_start(&normalized);
        let original_prompt_len = payload_start(original);

        Self {
            original,
            normalized,
            prompt_len,
            original_prompt_len,
        }
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn prompt(&self) -> &str {
        &self.normalized[..self.prompt_len]
    }

    /// Original-case text before any JSON payload
    pub fn original_prompt(&self) -> &'a str {
        &self.original[..self.original_prompt_len]
    }
}

fn payload_start(text: &str) -> usize {
    text.find(|c: char| c == '[' || c == '{')
        .unwrap_or(text.len())
}

/// Ordered rule table; first match wins
#[derive(Debug, Clone)]
pub struct Router {
    rules: Vec<MatchRule>,
}

impl Router {
    /// Router over an explicit rule order
    pub fn new(rules: Vec<MatchRule>) -> Self {
        Self { rules }
    }

    /// Router over the standard rule table
    pub fn standard() -> Result<Self> {
        Ok(Self::new(standard_rules()?))
    }

    pub fn rules(&self) -> &[MatchRule] {
        &self.rules
    }

    /// Rule labels in precedence order
    pub fn labels(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.label).collect()
    }

    /// Classify a query, reporting which rule matched
    pub fn classify_with_rule(&self, query: &str) -> Option<(&MatchRule, Intent)> {
        let normalized = NormalizedQuery::new(query);
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(&normalized).map(|intent| (rule, intent)))
    }

    /// Classify a query
    pub fn classify(&self, query: &str) -> Intent {
        match self.classify_with_rule(query) {
            Some((rule, intent)) => {
                debug!(rule = rule.label, ?intent, "query matched");
                intent
            }
            None => {
                debug!("no rule matched");
                Intent::NoMatch
            }
        }
    }
}
