//! quickanswer - CLI entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use quickanswer::{
    cli::{Args, Commands},
    logging,
    repl::{self, ReplSession},
    Assistant, Config,
};
use std::process::ExitCode;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("{}: {}", "Error".red().bold(), e);
        return Ok(ExitCode::from(2));
    }

    let verbosity = args.verbosity();
    logging::init(verbosity);

    let config = Config::load(args.config.clone())?;
    debug!(?config, "configuration loaded");

    match &args.command {
        Some(Commands::Config) => {
            print!("{}", toml::to_string_pretty(&config)?);
            return Ok(ExitCode::SUCCESS);
        }
        Some(Commands::Rules) => {
            let assistant = Assistant::from_config(config)?;
            repl::print_rules(&assistant);
            return Ok(ExitCode::SUCCESS);
        }
        _ => {}
    }

    let assistant = Assistant::from_config(config)?;

    let Some(query) = args.one_shot_query() else {
        let mut session = ReplSession::new(assistant, verbosity, args.timeout())?;
        session.run().await?;
        return Ok(ExitCode::SUCCESS);
    };

    match assistant.answer_within(query, args.timeout()).await {
        Ok(answer) if answer.is_empty() => {
            if verbosity.show_progress() {
                eprintln!("{}", "No answer for that question.".dimmed());
            }
            Ok(ExitCode::from(1))
        }
        Ok(answer) => {
            println!("{}", answer);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            Ok(ExitCode::from(if e.is_user_error() { 2 } else { 3 }))
        }
    }
}
