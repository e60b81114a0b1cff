//! Query handlers
//!
//! - facts: fixed answers (Shakespeare, name)
//! - calendar: clock and date formatting
//! - weather: current conditions for a city
//! - repo_stats: GitHub profile aggregation
//! - grade: weighted grade aggregation

pub mod calendar;
pub mod facts;
pub mod grade;
pub mod repo_stats;
pub mod weather;

pub use calendar::{CalendarKind, Clock, FixedClock, SystemClock};
pub use facts::FactKind;
pub use grade::{compute_grade, Assignment, GradeResult, Letter, LetterScale};
pub use repo_stats::{compute_stats, ProfileRecord, RepoStats, RepositoryRecord};
pub use weather::WeatherReport;
