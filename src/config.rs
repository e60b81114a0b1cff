//! Configuration management for quickanswer
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.quickanswer/config.toml

use crate::errors::{QueryError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Placeholder substituted when the weather API key is not set
pub const WEATHER_KEY_PLACEHOLDER: &str = "demo";

/// Placeholder substituted when no GitHub token is set (unauthenticated requests)
pub const GITHUB_TOKEN_PLACEHOLDER: &str = "";

/// Complete configuration for quickanswer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub facts: FactsConfig,
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Outbound HTTP settings shared by all clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    /// Honor HTTP(S)_PROXY from the environment
    pub use_system_proxy: bool,
}

/// OpenWeatherMap settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    pub base_url: String,
    /// Environment variable holding the API key
    pub api_key_env: String,
    pub units: String,
}

/// GitHub REST API settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub base_url: String,
    /// Environment variable holding the access token
    pub token_env: String,
    pub per_page: u32,
}

/// Fixed-fact answers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactsConfig {
    pub name: String,
}

/// Interactive mode settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReplConfig {
    pub history_file: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: concat!("quickanswer/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openweathermap.org/data/2.5".to_string(),
            api_key_env: "OPENWEATHER_API_KEY".to_string(),
            units: "imperial".to_string(),
        }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            per_page: 100,
        }
    }
}

impl Default for FactsConfig {
    fn default() -> Self {
        Self {
            name: "Rohan".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| QueryError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| QueryError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load default configuration from standard location or use built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    /// Standard config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".quickanswer").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.http.timeout_secs == 0 {
            return Err(QueryError::ConfigError(
                "http.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.weather.base_url.trim().is_empty() || self.github.base_url.trim().is_empty() {
            return Err(QueryError::ConfigError("base_url must not be empty".to_string()));
        }

        if !(1..=100).contains(&self.github.per_page) {
            return Err(QueryError::ConfigError(
                "github.per_page must be between 1 and 100".to_string(),
            ));
        }

        match self.weather.units.as_str() {
            "imperial" | "metric" | "standard" => {}
            other => {
                return Err(QueryError::ConfigError(format!(
                    "Invalid weather units: {}",
                    other
                )))
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| QueryError::ConfigError(format!("Failed to serialize config: {}", e)))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                QueryError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| QueryError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    /// Per-request timeout for outbound calls
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http.timeout_secs)
    }

    /// Weather API key, read at call time
    pub fn weather_api_key(&self) -> String {
        read_credential(&self.weather.api_key_env, WEATHER_KEY_PLACEHOLDER)
    }

    /// GitHub token, read at call time; empty means unauthenticated
    pub fn github_token(&self) -> String {
        read_credential(&self.github.token_env, GITHUB_TOKEN_PLACEHOLDER)
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    /// REPL history file, if configured
    pub fn history_path(&self) -> Option<PathBuf> {
        self.repl.history_file.as_deref().map(Self::expand_path)
    }
}

fn read_credential(var: &str, placeholder: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => placeholder.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.timeout_secs, 10);
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.facts.name, "Rohan");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_timeout() {
        let mut config = Config::default();
        config.http.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_per_page() {
        let mut config = Config::default();
        config.github.per_page = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_units() {
        let mut config = Config::default();
        config.weather.units = "kelvinish".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.facts.name = "Ada".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(Some(path)).unwrap();
        assert_eq!(loaded.facts.name, "Ada");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[facts]\nname = \"Grace\"\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.facts.name, "Grace");
        assert_eq!(loaded.weather.units, "imperial");
    }

    #[test]
    fn test_missing_credential_uses_placeholder() {
        let mut config = Config::default();
        config.weather.api_key_env = "QUICKANSWER_TEST_UNSET_WEATHER_KEY".to_string();
        config.github.token_env = "QUICKANSWER_TEST_UNSET_GITHUB_TOKEN".to_string();
        assert_eq!(config.weather_api_key(), WEATHER_KEY_PLACEHOLDER);
        assert_eq!(config.github_token(), GITHUB_TOKEN_PLACEHOLDER);
    }

    #[test]
    fn test_expand_path_without_tilde() {
        let expanded = Config::expand_path("/absolute/path");
        assert_eq!(expanded.to_string_lossy(), "/absolute/path");
    }
}
