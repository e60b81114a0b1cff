//! Query dispatch shared by one-shot and REPL modes
//!
//! The router decides the [`Intent`]; the assistant maps each intent to its
//! handler. Handler errors propagate unchanged; an unmatched query answers
//! with the empty string.

use crate::clients::{GithubClient, GithubProvider, OpenWeatherClient, WeatherProvider};
use crate::config::Config;
use crate::errors::{QueryError, Result};
use crate::handlers::{calendar, facts, grade, repo_stats, weather, Clock, SystemClock};
use crate::router::{Intent, Router};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Answers queries; cheap to share across tasks
#[derive(Clone)]
pub struct Assistant {
    router: Arc<Router>,
    weather: Arc<dyn WeatherProvider>,
    github: Arc<dyn GithubProvider>,
    clock: Arc<dyn Clock>,
    config: Arc<Config>,
}

impl Assistant {
    /// Assistant backed by the real HTTP clients and the system clock
    pub fn from_config(config: Config) -> Result<Self> {
        let weather = OpenWeatherClient::new(config.clone())?;
        let github = GithubClient::new(config.clone())?;
        Ok(Self::new(
            Router::standard()?,
            Arc::new(weather),
            Arc::new(github),
            Arc::new(SystemClock),
            config,
        ))
    }

    /// Assistant over explicit collaborators
    pub fn new(
        router: Router,
        weather: Arc<dyn WeatherProvider>,
        github: Arc<dyn GithubProvider>,
        clock: Arc<dyn Clock>,
        config: Config,
    ) -> Self {
        Self {
            router: Arc::new(router),
            weather,
            github,
            clock,
            config: Arc::new(config),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Classify without answering
    pub fn classify(&self, query: &str) -> Intent {
        self.router.classify(query)
    }

    /// Classify and answer a query
    pub async fn answer(&self, query: &str) -> Result<String> {
        let intent = self.classify(query);
        self.execute(intent).await
    }

    /// Answer a query, giving up after `limit`
    ///
    /// Dropping the pending answer cancels any in-flight request.
    pub async fn answer_within(&self, query: &str, limit: Duration) -> Result<String> {
        let intent = self.classify(query);
        self.execute_within(intent, limit).await
    }

    /// Run the handler for a classified intent, giving up after `limit`
    pub async fn execute_within(&self, intent: Intent, limit: Duration) -> Result<String> {
        tokio::time::timeout(limit, self.execute(intent))
            .await
            .map_err(|_| QueryError::Timeout {
                duration_ms: limit.as_millis() as u64,
            })?
    }

    /// Run the handler for an already classified intent
    pub async fn execute(&self, intent: Intent) -> Result<String> {
        match intent {
            Intent::Fact(kind) => Ok(facts::answer(kind, &self.config.facts.name)),
            Intent::Calendar(kind) => Ok(calendar::answer(kind, self.clock.now())),
            Intent::Grade { payload } => grade::answer(&payload),
            Intent::Weather { city } => {
                info!(city = %city, "looking up weather");
                let report = self.weather.current_weather(&city).await?;
                Ok(weather::describe(&report))
            }
            Intent::RepoStats { username } => {
                info!(username = %username, "looking up GitHub stats");
                self.repo_stats(&username).await
            }
            Intent::NoMatch => {
                debug!("answering with empty string");
                Ok(String::new())
            }
        }
    }

    async fn repo_stats(&self, username: &str) -> Result<String> {
        // Both requests are independent; aggregation waits for both.
        let (profile, repos) = tokio::try_join!(
            self.github.profile(username),
            self.github.repositories(username)
        )?;
        let stats = repo_stats::compute_stats(&profile, &repos)?;
        Ok(repo_stats::summarize(&profile, &stats))
    }
}
