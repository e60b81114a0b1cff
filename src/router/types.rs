//! Classification results

use crate::handlers::{CalendarKind, FactKind};

/// What a query asks for, with any captured argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Fact(FactKind),
    Weather { city: String },
    RepoStats { username: String },
    Grade { payload: String },
    Calendar(CalendarKind),
    NoMatch,
}

impl Intent {
    /// True when answering requires a network round trip
    pub fn is_remote(&self) -> bool {
        matches!(self, Intent::Weather { .. } | Intent::RepoStats { .. })
    }

    pub fn is_match(&self) -> bool {
        !matches!(self, Intent::NoMatch)
    }
}

/// Handler tag carried by a rule; becomes an [`Intent`] once bound to its argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Fact(FactKind),
    Weather,
    RepoStats,
    Grade,
    Calendar(CalendarKind),
}

impl Target {
    /// Bind a captured argument.
    ///
    /// Returns `None` when a parameterized target gets an empty argument.
    pub fn bind(self, argument: Option<&str>) -> Option<Intent> {
        match self {
            Target::Fact(kind) => Some(Intent::Fact(kind)),
            Target::Calendar(kind) => Some(Intent::Calendar(kind)),
            Target::Weather => {
                clean_name(argument?).map(|city| Intent::Weather { city })
            }
            Target::RepoStats => {
                clean_name(argument?).map(|username| Intent::RepoStats { username })
            }
            Target::Grade => {
                let payload = argument?.trim();
                if payload.is_empty() {
                    None
                } else {
                    Some(Intent::Grade {
                        payload: payload.to_string(),
                    })
                }
            }
        }
    }
}

/// Trim whitespace and trailing sentence punctuation from a captured name
fn clean_name(raw: &str) -> Option<String> {
    let cleaned = raw
        .trim()
        .trim_end_matches(|c: char| matches!(c, '?' | '!' | '.' | ',' | ';'))
        .trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
