use crate::{WeatherError, WeatherObservation, config::OpenWeatherConfig};
use anyhow::Context;
use async_trait::async_trait;
use reqwest::Client;
use std::{fmt::Debug, time::Duration};

pub mod openweather;

pub use openweather::OpenWeatherProvider;

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for an already-normalized location.
    async fn current_conditions(&self, location: &str)
    -> Result<WeatherObservation, WeatherError>;
}

/// Construct the OpenWeather provider from its config section.
pub fn provider_from_config(config: &OpenWeatherConfig) -> anyhow::Result<Box<dyn WeatherProvider>> {
    let api_key = config.api_key().ok_or_else(|| {
        anyhow::anyhow!(
            "No API key configured for OpenWeather.\n\
                 Hint: run `voice-weather configure` or set OPENWEATHERAPI_KEY."
        )
    })?;

    let mut builder = Client::builder();
    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    let http = builder.build().context("Failed to build HTTP client")?;

    let mut provider = OpenWeatherProvider::new(api_key.to_owned(), http);
    if let Some(base_url) = &config.base_url {
        provider = provider.with_base_url(base_url.clone());
    }

    Ok(Box::new(provider))
}
