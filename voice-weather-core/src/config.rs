use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const ENV_ENABLED: &str = "OPENWEATHERAPI_ENABLED";
pub const ENV_API_KEY: &str = "OPENWEATHERAPI_KEY";
pub const ENV_COUNTRY: &str = "OPENWEATHERAPI_CC";

/// OpenWeather access settings, injected into the fetcher.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct OpenWeatherConfig {
    pub enabled: bool,
    pub api_key: Option<String>,

    /// Appended to locations that lack a country part, e.g. "US".
    pub default_country: String,

    /// Overrides `https://api.openweathermap.org`.
    pub base_url: Option<String>,

    /// Request timeout; unset means the HTTP client default.
    pub timeout_secs: Option<u64>,
}

impl OpenWeatherConfig {
    /// Lookups run only when switched on and an API key is present.
    pub fn is_enabled(&self) -> bool {
        self.enabled && self.api_key().is_some()
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|key| !key.is_empty())
    }
}

/// Bot-side defaults used when speech does not name a place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    pub default_location: String,

    /// "F" for Fahrenheit, anything else for Celsius.
    pub units: String,

    pub condition_map: PathBuf,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            default_location: String::new(),
            units: "C".to_string(),
            condition_map: PathBuf::from("weather-map.json"),
        }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// [openweather]
/// enabled = true
/// api_key = "..."
/// default_country = "US"
///
/// [voice]
/// default_location = "Seattle,WA"
/// units = "F"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub openweather: OpenWeatherConfig,
    pub voice: VoiceConfig,
}

impl Config {
    /// Load config from the platform config dir, or defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, everything disabled.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Save config, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "voice-weather", "voice-weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Apply `OPENWEATHERAPI_*` variables from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(enabled) = lookup(ENV_ENABLED) {
            self.openweather.enabled = enabled == "true";
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.openweather.api_key = Some(key);
        }
        if let Some(country) = lookup(ENV_COUNTRY) {
            self.openweather.default_country = country;
        }
    }

    /// Set the API key and switch lookups on.
    pub fn set_api_key(&mut self, api_key: String) {
        self.openweather.api_key = Some(api_key);
        self.openweather.enabled = true;
    }
}
