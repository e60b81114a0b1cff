//! Match rule descriptors and the standard rule table
//!
//! Precedence is the order of the table returned by [`standard_rules`]:
//! fact keywords, then parameterized patterns, then calendar keywords.

use crate::errors::{QueryError, Result};
use crate::handlers::{CalendarKind, FactKind};
use crate::router::types::{Intent, Target};
use crate::router::NormalizedQuery;
use regex::Regex;

/// How a rule recognizes a query
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Any of these substrings appears in the normalized prompt text
    Keywords(Vec<&'static str>),

    /// Case-insensitive pattern whose first capture group is the argument.
    ///
    /// Unless `spans_payload` is set, the pattern only sees the text before
    /// any JSON payload.
    Capture { regex: Regex, spans_payload: bool },
}

/// One entry in the ordered rule table
#[derive(Debug, Clone)]
pub struct MatchRule {
    pub label: &'static str,
    pub matcher: Matcher,
    pub target: Target,
}

impl MatchRule {
    pub fn keywords(label: &'static str, keywords: &[&'static str], target: Target) -> Self {
        Self {
            label,
            matcher: Matcher::Keywords(keywords.to_vec()),
            target,
        }
    }

    /// Compile a capture rule; the pattern is matched case-insensitively
    pub fn capture(label: &'static str, pattern: &str, target: Target) -> Result<Self> {
        Self::compile(label, pattern, target, false)
    }

    /// Compile a capture rule whose argument is the JSON payload itself
    pub fn capture_payload(label: &'static str, pattern: &str, target: Target) -> Result<Self> {
        Self::compile(label, pattern, target, true)
    }

    fn compile(
        label: &'static str,
        pattern: &str,
        target: Target,
        spans_payload: bool,
    ) -> Result<Self> {
        let regex = Regex::new(&format!("(?is){}", pattern)).map_err(|e| {
            QueryError::ConfigError(format!("Invalid pattern for rule '{}': {}", label, e))
        })?;
        Ok(Self {
            label,
            matcher: Matcher::Capture {
                regex,
                spans_payload,
            },
            target,
        })
    }

    /// Try this rule against a query
    pub fn evaluate(&self, query: &NormalizedQuery<'_>) -> Option<Intent> {
        match &self.matcher {
            Matcher::Keywords(keywords) => {
                let prompt = query.prompt();
                if keywords.iter().any(|k| prompt.contains(k)) {
                    self.target.bind(None)
                } else {
                    None
                }
            }
            Matcher::Capture {
                regex,
                spans_payload,
            } => {
                // Captured from the original text so arguments keep their casing.
                let text = if *spans_payload {
                    query.original()
                } else {
                    query.original_prompt()
                };
                let captures = regex.captures(text)?;
                self.target.bind(captures.get(1).map(|m| m.as_str()))
            }
        }
    }

    /// Human-readable form of the matcher
    pub fn describe(&self) -> String {
        match &self.matcher {
            Matcher::Keywords(keywords) => keywords
                .iter()
                .map(|k| format!("\"{}\"", k))
                .collect::<Vec<_>>()
                .join(" | "),
            Matcher::Capture { regex, .. } => format!("/{}/", regex.as_str()),
        }
    }
}

/// The rule table in precedence order
pub fn standard_rules() -> Result<Vec<MatchRule>> {
    Ok(vec![
        // Fixed facts
        MatchRule::keywords(
            "fact.shakespeare",
            &["shakespeare"],
            Target::Fact(FactKind::Shakespeare),
        ),
        MatchRule::keywords("fact.name", &["name"], Target::Fact(FactKind::Name)),
        // Parameterized
        MatchRule::capture(
            "weather",
            // The place follows the last "in"/"at"; a trailing time phrase is dropped.
            r"\bweather\b.*?\b(?:in|for|at)\s+(?:.*\b(?:in|at)\s+)?(.*?)(?:\s+(?:for\s+)?(?:today|tomorrow|tonight|(?:right\s+)?now|this\s+(?:morning|afternoon|evening|week|weekend)))?[\s?!.]*$",
            Target::Weather,
        )?,
        MatchRule::capture(
            "github.stats",
            r"\bgithub\s+(?:stats|statistics|profile|summary)\s+(?:(?:for|of)\b\s*)?@?([A-Za-z0-9-]*)",
            Target::RepoStats,
        )?,
        MatchRule::capture_payload(
            "grade",
            r"\bcalculate\s+grade\s*:\s*(.*)$",
            Target::Grade,
        )?,
        // Calendar and clock
        MatchRule::keywords(
            "clock.time",
            &["what is the current time"],
            Target::Calendar(CalendarKind::Time),
        ),
        MatchRule::keywords(
            "calendar.date",
            &["what is today's date", "what is the date today"],
            Target::Calendar(CalendarKind::Date),
        ),
        MatchRule::keywords(
            "calendar.day",
            &["what day is today", "what day of the week is it"],
            Target::Calendar(CalendarKind::DayOfWeek),
        ),
        MatchRule::keywords(
            "calendar.year",
            &["what year is it", "what is the current year"],
            Target::Calendar(CalendarKind::Year),
        ),
        MatchRule::keywords(
            "calendar.month",
            &["what month is it", "what is the current month"],
            Target::Calendar(CalendarKind::Month),
        ),
    ])
}
