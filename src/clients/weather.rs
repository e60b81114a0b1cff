//! OpenWeatherMap client

use crate::clients::{http_client, WeatherProvider};
use crate::config::Config;
use crate::errors::{QueryError, Result};
use crate::handlers::WeatherReport;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

const SERVICE: &str = "OpenWeatherMap";

/// HTTP client for the OpenWeatherMap current-weather endpoint
pub struct OpenWeatherClient {
    client: Client,
    config: Config,
}

impl OpenWeatherClient {
    /// Create a new client from configuration
    pub fn new(config: Config) -> Result<Self> {
        let client = http_client(&config)?;

        Ok(Self { client, config })
    }

    /// Endpoint URL for current conditions
    pub fn endpoint(&self) -> String {
        format!("{}/weather", self.config.weather.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current_weather(&self, city: &str) -> Result<WeatherReport> {
        let url = self.endpoint();
        let api_key = self.config.weather_api_key();
        debug!(%url, city, "fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", api_key.as_str()),
                ("units", self.config.weather.units.as_str()),
            ])
            .send()
            .await
            .map_err(|e| QueryError::upstream(SERVICE, format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, city, "weather lookup failed");
            return Err(QueryError::upstream(SERVICE, format!("status {}", status)));
        }

        response
            .json::<WeatherReport>()
            .await
            .map_err(|e| QueryError::upstream(SERVICE, format!("unexpected response: {}", e)))
    }
}
