//! Errors produced while looking up weather for a voice response.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeatherError {
    /// Lookups are switched off in config, or no API key is set.
    #[error("OpenWeather lookups are disabled")]
    Disabled,

    #[error("Failed to send request to OpenWeather: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("OpenWeather request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to parse OpenWeather JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("OpenWeather response for '{0}' contained no weather conditions")]
    EmptyConditions(String),
}

impl WeatherError {
    /// Whether this error means no lookup was attempted at all.
    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}
