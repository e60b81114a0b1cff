//! Built-in REPL commands

use colored::*;

/// REPL command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Rules,
    Exit,
    Unknown { input: String },
}

/// Whether the input is a slash command rather than a question
pub fn is_command(input: &str) -> bool {
    input.trim_start().starts_with('/')
}

/// Parse input string into a command
pub fn parse(input: &str) -> Command {
    let trimmed = input.trim();
    let name = trimmed
        .strip_prefix('/')
        .and_then(|rest| rest.split_whitespace().next())
        .map(str::to_lowercase);

    match name.as_deref() {
        Some("help" | "h") => Command::Help,
        Some("rules") => Command::Rules,
        Some("exit" | "quit" | "q") => Command::Exit,
        _ => Command::Unknown {
            input: trimmed.to_string(),
        },
    }
}

/// Display help information
pub fn show_help() {
    println!("\n{}", "Ask a question, or use a command:".bold().cyan());
    let commands = [
        ("/help, /h", "Show this help message"),
        ("/rules", "Show rules in precedence order"),
        ("/exit, /quit, /q", "Leave the prompt"),
    ];
    for (cmd, desc) in commands {
        println!("  {:<20} {}", cmd.green(), desc);
    }
    println!("\n{}", "Examples:".bold().cyan());
    for example in [
        "what is today's date",
        "weather in Chicago",
        "github stats for octocat",
        r#"calculate grade: [{"name":"hw1","score":45,"maxScore":50,"weight":2}]"#,
    ] {
        println!("  {}", example.dimmed());
    }
    println!();
}
