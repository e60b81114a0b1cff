//! Outbound API clients
//!
//! The assistant only sees the provider traits, so tests can swap in
//! canned data without touching the network.

pub mod github;
pub mod weather;

pub use github::GithubClient;
pub use weather::OpenWeatherClient;

use crate::config::Config;
use crate::errors::Result;
use crate::handlers::{ProfileRecord, RepositoryRecord, WeatherReport};
use async_trait::async_trait;
use reqwest::Client;

/// Shared reqwest client settings
pub fn http_client(config: &Config) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.http.user_agent.clone());
    if !config.http.use_system_proxy {
        builder = builder.no_proxy();
    }
    Ok(builder.build()?)
}

/// Current-weather lookup by city
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport>;
}

/// GitHub account lookup by username
#[async_trait]
pub trait GithubProvider: Send + Sync {
    async fn profile(&self, username: &str) -> Result<ProfileRecord>;

    async fn repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>>;
}
