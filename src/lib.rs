//! quickanswer - answer free-text questions
//!
//! # Architecture
//!
//! - **router**: ordered match rules turn a query into an [`Intent`]
//! - **handlers**: facts, calendar, weather, GitHub stats and grades
//! - **clients**: OpenWeatherMap and GitHub HTTP clients behind traits
//! - **assistant**: maps each intent to its handler
//!
//! ```no_run
//! # async fn demo() -> quickanswer::Result<()> {
//! use quickanswer::{Assistant, Config};
//!
//! let assistant = Assistant::from_config(Config::default())?;
//! let answer = assistant.answer("what year is it").await?;
//! println!("{}", answer);
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod config;
pub mod router;
pub mod handlers;
pub mod clients;
pub mod assistant;

// Re-export commonly used types
pub use assistant::Assistant;
pub use config::Config;
pub use errors::{QueryError, Result};
pub use router::{Intent, Router};

// Terminal front end
pub mod cli;
pub mod logging;
pub mod repl;
