//! Interactive prompt
//!
//! Reads questions line by line, answers them through the [`Assistant`] and
//! keeps going after errors. Slash commands control the session.

pub mod commands;
pub mod input;

use crate::assistant::Assistant;
use crate::cli::Verbosity;
use crate::router::Intent;
use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::repl::commands::{is_command, Command};
use crate::repl::input::{InputEvent, InputHandler};

/// REPL session coordinator
pub struct ReplSession {
    input: InputHandler,
    assistant: Assistant,
    verbosity: Verbosity,
    timeout: Duration,
}

impl ReplSession {
    pub fn new(assistant: Assistant, verbosity: Verbosity, timeout: Duration) -> Result<Self> {
        let input = InputHandler::new(assistant.config().history_path())?;
        Ok(Self {
            input,
            assistant,
            verbosity,
            timeout,
        })
    }

    /// Run until `/exit` or end of input
    pub async fn run(&mut self) -> Result<()> {
        if self.verbosity.show_progress() {
            println!(
                "{} {}",
                "quickanswer".bold().cyan(),
                "- type /help for commands".dimmed()
            );
        }

        loop {
            let line = match self.input.read_line()? {
                InputEvent::Line(line) => line,
                InputEvent::Interrupted => continue,
                InputEvent::Eof => break,
            };

            if line.is_empty() {
                continue;
            }

            if is_command(&line) {
                match commands::parse(&line) {
                    Command::Help => commands::show_help(),
                    Command::Rules => print_rules(&self.assistant),
                    Command::Exit => break,
                    Command::Unknown { input } => {
                        println!("{}", format!("Unknown command: {}", input).red());
                        println!("Type {} for available commands", "/help".cyan());
                    }
                }
                continue;
            }

            self.ask(&line).await;
        }

        self.input.save_history()?;
        Ok(())
    }

    async fn ask(&self, line: &str) {
        let intent = self.assistant.classify(line);
        let spinner = (intent.is_remote() && self.verbosity.show_progress())
            .then(|| start_spinner(&intent));

        let outcome = self.assistant.execute_within(intent, self.timeout).await;

        if let Some(pb) = spinner {
            pb.finish_and_clear();
        }

        match outcome {
            Ok(answer) if answer.is_empty() => {
                println!("{}", "Sorry, I don't know how to answer that.".dimmed());
            }
            Ok(answer) => println!("{}", answer),
            Err(e) if e.is_user_error() => println!("{}", e.to_string().yellow()),
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

fn start_spinner(intent: &Intent) -> ProgressBar {
    let message = match intent {
        Intent::Weather { city } => format!("Checking the weather in {}", city),
        Intent::RepoStats { username } => format!("Fetching GitHub stats for {}", username),
        _ => "Working".to_string(),
    };
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Print the rule table in precedence order
pub fn print_rules(assistant: &Assistant) {
    for (position, rule) in assistant.router().rules().iter().enumerate() {
        println!(
            "{:>2}. {:<18} {}",
            position + 1,
            rule.label.green(),
            rule.describe().dimmed()
        );
    }
}
