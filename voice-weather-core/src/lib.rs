//! Core library for voice weather responses.
//!
//! This crate defines:
//! - Configuration handling (file + environment overrides)
//! - Location extraction from spoken requests
//! - The OpenWeather provider and condition-code mapping
//! - The fetcher that turns an utterance into a speakable weather result
//!
//! It is used by `voice-weather-cli`, but can also be embedded in a voice pipeline directly.

pub mod conditions;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod location;
pub mod model;
pub mod provider;

pub use conditions::{ConditionMap, ConditionMapEntry};
pub use config::{Config, OpenWeatherConfig, VoiceConfig};
pub use error::WeatherError;
pub use fetcher::WeatherFetcher;
pub use location::{extract_location, normalize_location};
pub use model::{
    TemperatureUnit, WeatherObservation, WeatherQuery, WeatherResult, kelvin_to_celsius,
    kelvin_to_fahrenheit,
};
pub use provider::{OpenWeatherProvider, WeatherProvider};
