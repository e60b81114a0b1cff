//! GitHub REST client

use crate::clients::{http_client, GithubProvider};
use crate::config::Config;
use crate::errors::{QueryError, Result};
use crate::handlers::{ProfileRecord, RepositoryRecord};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

const SERVICE: &str = "GitHub";

/// HTTP client for the GitHub users API
pub struct GithubClient {
    client: Client,
    config: Config,
}

impl GithubClient {
    /// Create a new client from configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = http_client(&config)?;

        Ok(Self { client, config })
    }

    fn base_url(&self) -> &str {
        self.config.github.base_url.trim_end_matches('/')
    }

    /// `GET /users/{username}`
    pub fn profile_url(&self, username: &str) -> String {
        format!("{}/users/{}", self.base_url(), username)
    }

    /// `GET /users/{username}/repos`
    pub fn repositories_url(&self, username: &str) -> String {
        format!("{}/users/{}/repos", self.base_url(), username)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let token = self.config.github_token();
        let request = request.header("Accept", "application/vnd.github+json");
        if token.is_empty() {
            request
        } else {
            request.bearer_auth(token)
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|e| QueryError::upstream(SERVICE, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, url = %response.url(), "GitHub request failed");
            return Err(QueryError::upstream(SERVICE, format!("status {}", status)));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| QueryError::upstream(SERVICE, format!("unexpected response: {}", e)))
    }
}

#[async_trait]
impl GithubProvider for GithubClient {
    async fn profile(&self, username: &str) -> Result<ProfileRecord> {
        let url = self.profile_url(username);
        debug!(%url, "fetching GitHub profile");
        self.get_json(self.client.get(&url)).await
    }

    async fn repositories(&self, username: &str) -> Result<Vec<RepositoryRecord>> {
        let url = self.repositories_url(username);
        debug!(%url, "fetching GitHub repositories");
        let per_page = self.config.github.per_page.to_string();
        self.get_json(self.client.get(&url).query(&[("per_page", per_page.as_str())]))
            .await
    }
}
