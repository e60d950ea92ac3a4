use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Condition reported when no real data could be obtained.
pub const SENTINEL_CONDITION: &str = "Snow";
/// Temperature reported when no real data could be obtained.
pub const SENTINEL_TEMPERATURE: &str = "120";
/// Local datetime placeholder; forecast timestamps are not surfaced yet.
pub const LOCAL_DATETIME_PLACEHOLDER: &str = "test";

const KELVIN_OFFSET: f64 = 273.16;

/// Temperature unit requested by the bot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[default]
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// `"F"` selects Fahrenheit; anything else means Celsius.
    pub fn from_preference(value: &str) -> Self {
        if value == "F" {
            Self::Fahrenheit
        } else {
            Self::Celsius
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Celsius => "C",
            Self::Fahrenheit => "F",
        }
    }

    /// Convert a kelvin reading into this unit.
    pub fn convert_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            Self::Celsius => kelvin_to_celsius(kelvin),
            Self::Fahrenheit => kelvin_to_fahrenheit(kelvin),
        }
    }

    /// Convert and round to whole degrees for speech.
    pub fn format_kelvin(&self, kelvin: f64) -> String {
        format!("{:.0}", self.convert_kelvin(kelvin))
    }
}

impl fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    kelvin_to_celsius(kelvin) * 9.0 / 5.0 + 32.0
}

#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub location: String,
    pub unit: TemperatureUnit,
}

impl WeatherQuery {
    pub fn new(location: impl Into<String>, unit: TemperatureUnit) -> Self {
        Self {
            location: location.into(),
            unit,
        }
    }
}

/// Provider reading decoded from a current-conditions response.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherObservation {
    pub condition_label: String,
    pub temperature_kelvin: f64,
    pub location_name: String,
    pub timestamp_epoch: f64,
}

impl WeatherObservation {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.timestamp_epoch as i64, 0)
    }
}

/// Everything a voice response needs to speak the current weather.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherResult {
    pub condition: String,
    pub is_forecast: bool,
    pub local_datetime: String,
    pub speakable_location: String,
    pub temperature: String,
    pub temperature_unit: TemperatureUnit,
}

impl WeatherResult {
    /// Fixed result used whenever lookups are disabled or fail.
    ///
    /// It looks like a real reading, so callers of the string form must treat
    /// it as "no data" rather than a forecast.
    pub fn sentinel(location: &str) -> Self {
        Self {
            condition: SENTINEL_CONDITION.to_string(),
            is_forecast: false,
            local_datetime: LOCAL_DATETIME_PLACEHOLDER.to_string(),
            speakable_location: location.to_string(),
            temperature: SENTINEL_TEMPERATURE.to_string(),
            temperature_unit: TemperatureUnit::Celsius,
        }
    }

    /// Flatten into `(condition, is_forecast, local_datetime, speakable_location, temperature, temperature_unit)`.
    pub fn into_tuple(self) -> (String, String, String, String, String, String) {
        (
            self.condition,
            self.is_forecast.to_string(),
            self.local_datetime,
            self.speakable_location,
            self.temperature,
            self.temperature_unit.to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kelvin_conversions_hit_reference_points() {
        assert_eq!(kelvin_to_celsius(273.16), 0.0);
        assert_eq!(kelvin_to_fahrenheit(273.16), 32.0);
        assert!((kelvin_to_fahrenheit(373.16) - 212.0).abs() < 1e-9);
    }

    #[test]
    fn format_rounds_to_whole_degrees() {
        assert_eq!(TemperatureUnit::Celsius.format_kelvin(300.0), "27");
        assert_eq!(TemperatureUnit::Fahrenheit.format_kelvin(373.16), "212");
        assert_eq!(TemperatureUnit::Celsius.format_kelvin(283.0), "10");
    }

    #[test]
    fn only_uppercase_f_selects_fahrenheit() {
        assert_eq!(TemperatureUnit::from_preference("F"), TemperatureUnit::Fahrenheit);
        assert_eq!(TemperatureUnit::from_preference("C"), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::from_preference("f"), TemperatureUnit::Celsius);
        assert_eq!(TemperatureUnit::from_preference(""), TemperatureUnit::Celsius);
    }

    #[test]
    fn sentinel_tuple_matches_fixed_defaults() {
        let tuple = WeatherResult::sentinel("Seattle").into_tuple();

        assert_eq!(
            tuple,
            (
                "Snow".to_string(),
                "false".to_string(),
                "test".to_string(),
                "Seattle".to_string(),
                "120".to_string(),
                "C".to_string(),
            )
        );
    }

    #[test]
    fn observed_at_converts_epoch_seconds() {
        let obs = WeatherObservation {
            condition_label: "Clear".into(),
            temperature_kelvin: 290.0,
            location_name: "Testville".into(),
            timestamp_epoch: 1_700_000_000.0,
        };

        let at = obs.observed_at().expect("valid timestamp");
        assert_eq!(at.timestamp(), 1_700_000_000);
    }
}
