//! Current-weather answers

use serde::{Deserialize, Serialize};

/// Subset of the OpenWeatherMap `/weather` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub weather: Vec<WeatherCondition>,
    pub main: WeatherMain,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    /// Degrees Fahrenheit
    pub temp: f64,
}

impl WeatherReport {
    /// First condition description, if the upstream sent one
    pub fn description(&self) -> &str {
        self.weather
            .first()
            .map(|c| c.description.as_str())
            .unwrap_or("unknown conditions")
    }
}

/// Render the report as a sentence
pub fn describe(report: &WeatherReport) -> String {
    format!(
        "The current weather in {} is {} with a temperature of {}°F.",
        report.name,
        report.description(),
        report.main.temp.round() as i64
    )
}
