//! Command-line argument parsing for quickanswer
//!
//! Provides clap-based CLI with subcommands and verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

/// quickanswer - answer everyday questions from the terminal
#[derive(Parser, Debug)]
#[command(name = "quickanswer")]
#[command(version)]
#[command(about = "Answer free-text questions about facts, time, weather, GitHub accounts and grades", long_about = None)]
pub struct Args {
    /// Question to answer (starts the interactive prompt when omitted)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Give up on a query after this many seconds
    #[arg(long, default_value_t = 15)]
    pub timeout: u64,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress everything except the answer)
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Answer a single question
    Ask {
        /// Question text
        query: String,
    },

    /// Start the interactive prompt
    Repl,

    /// Show the rule table in precedence order
    Rules,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Query timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Reject conflicting arguments
    pub fn validate(&self) -> Result<(), String> {
        if self.command.is_some() && self.query.is_some() {
            return Err("Cannot specify a query with a subcommand.".to_string());
        }

        if self.timeout == 0 {
            return Err("--timeout must be at least 1 second.".to_string());
        }

        Ok(())
    }

    /// The one-shot query, if any
    pub fn one_shot_query(&self) -> Option<&str> {
        match &self.command {
            Some(Commands::Ask { query }) => Some(query),
            Some(_) => None,
            None => self.query.as_deref(),
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Check if should show progress spinners
    pub fn show_progress(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "quickanswer=info",
            Verbosity::VeryVerbose => "quickanswer=debug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(parse(&["quickanswer", "-q"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(parse(&["quickanswer"]).verbosity(), Verbosity::Normal);
        assert_eq!(parse(&["quickanswer", "-v"]).verbosity(), Verbosity::Verbose);
        assert_eq!(parse(&["quickanswer", "-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_positional_query() {
        let args = parse(&["quickanswer", "what year is it"]);
        assert_eq!(args.one_shot_query(), Some("what year is it"));
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_ask_subcommand() {
        let args = parse(&["quickanswer", "ask", "weather in Rome"]);
        assert_eq!(args.one_shot_query(), Some("weather in Rome"));
    }

    #[test]
    fn test_rules_subcommand_has_no_query() {
        let args = parse(&["quickanswer", "rules"]);
        assert_eq!(args.command, Some(Commands::Rules));
        assert_eq!(args.one_shot_query(), None);
    }

    #[test]
    fn test_validate_zero_timeout() {
        let args = parse(&["quickanswer", "--timeout", "0", "hi"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_progress());
        assert!(Verbosity::Normal.show_progress());
        assert_eq!(Verbosity::VeryVerbose.log_filter(), "quickanswer=debug");
        assert_eq!(Verbosity::Verbose.as_str(), "verbose");
    }
}
