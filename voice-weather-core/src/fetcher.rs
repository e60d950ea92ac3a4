//! Speech-to-weather pipeline: location, provider lookup, condition mapping.

use crate::{
    ConditionMap, TemperatureUnit, WeatherError, WeatherQuery, WeatherResult,
    config::OpenWeatherConfig,
    location::{extract_location, normalize_location},
    model::LOCAL_DATETIME_PLACEHOLDER,
    provider::{WeatherProvider, provider_from_config},
};

#[derive(Debug)]
pub struct WeatherFetcher {
    config: OpenWeatherConfig,
    provider: Option<Box<dyn WeatherProvider>>,
    conditions: ConditionMap,
}

impl WeatherFetcher {
    /// Build a fetcher. No provider is constructed while lookups are disabled.
    pub fn new(config: OpenWeatherConfig, conditions: ConditionMap) -> anyhow::Result<Self> {
        let provider = if config.is_enabled() {
            tracing::info!("OpenWeather API enabled");
            Some(provider_from_config(&config)?)
        } else {
            None
        };

        Ok(Self {
            config,
            provider,
            conditions,
        })
    }

    /// Build a fetcher around an explicit provider.
    pub fn with_provider(
        config: OpenWeatherConfig,
        provider: Box<dyn WeatherProvider>,
        conditions: ConditionMap,
    ) -> Self {
        Self {
            config,
            provider: Some(provider),
            conditions,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.is_enabled() && self.provider.is_some()
    }

    /// Look up current weather for `query`.
    ///
    /// Returns `WeatherError::Disabled` without touching the network when
    /// lookups are switched off.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherResult, WeatherError> {
        let provider = match &self.provider {
            Some(provider) if self.config.is_enabled() => provider,
            _ => return Err(WeatherError::Disabled),
        };

        let location = normalize_location(&query.location, &self.config.default_country);
        tracing::info!(%location, unit = %query.unit, "Querying OpenWeather");

        let observation = provider.current_conditions(&location).await?;
        tracing::debug!(
            condition = %observation.condition_label,
            kelvin = observation.temperature_kelvin,
            name = %observation.location_name,
            observed_at = ?observation.observed_at(),
            "Decoded observation"
        );

        let result = WeatherResult {
            condition: self.conditions.resolve(&observation.condition_label),
            is_forecast: false,
            local_datetime: LOCAL_DATETIME_PLACEHOLDER.to_string(),
            speakable_location: observation.location_name,
            temperature: query.unit.format_kelvin(observation.temperature_kelvin),
            // Live readings always report "F", even for Celsius values.
            temperature_unit: TemperatureUnit::Fahrenheit,
        };

        tracing::info!(
            condition = %result.condition,
            temperature = %result.temperature,
            unit = %result.temperature_unit,
            location = %result.speakable_location,
            "Weather lookup complete"
        );
        Ok(result)
    }

    /// Like [`fetch`](Self::fetch), but logs failures and returns the sentinel result.
    pub async fn fetch_or_default(&self, query: &WeatherQuery) -> WeatherResult {
        match self.fetch(query).await {
            Ok(result) => result,
            Err(WeatherError::Disabled) => {
                tracing::debug!("OpenWeather disabled, using default weather");
                WeatherResult::sentinel(&query.location)
            }
            Err(err @ WeatherError::EmptyConditions(_)) => {
                tracing::error!(error = %err, "OpenWeather returned no conditions");
                WeatherResult::sentinel(&query.location)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Error getting weather data");
                WeatherResult::sentinel(&query.location)
            }
        }
    }

    /// Answer a spoken weather request.
    ///
    /// `bot_location` is used when the utterance names no place; `bot_units`
    /// is `"F"` for Fahrenheit, anything else for Celsius.
    pub async fn answer(
        &self,
        speech_text: &str,
        bot_location: &str,
        bot_units: &str,
    ) -> WeatherResult {
        let location = extract_location(speech_text, bot_location);
        let query = WeatherQuery::new(location, TemperatureUnit::from_preference(bot_units));
        self.fetch_or_default(&query).await
    }
}
