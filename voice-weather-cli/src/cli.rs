use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, Text};
use std::path::{Path, PathBuf};
use voice_weather_core::{ConditionMap, Config, WeatherFetcher, WeatherResult};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "voice-weather", version, about = "Answer spoken weather requests")]
pub struct Cli {
    /// Config file to use instead of the platform default.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Condition map JSON; overrides `voice.condition_map` from config.
    #[arg(long, global = true)]
    pub map: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer an utterance such as "what's the weather in Paris".
    Ask {
        /// The transcribed speech.
        utterance: String,

        /// Location used when the utterance names none.
        #[arg(long)]
        location: Option<String>,

        /// "F" for Fahrenheit, anything else for Celsius.
        #[arg(long)]
        units: Option<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Interactively set the OpenWeather key and bot defaults.
    Configure,

    /// Print where the config file lives.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config_path = match &self.config {
            Some(path) => path.clone(),
            None => Config::config_file_path()?,
        };

        match self.command {
            Command::Ask {
                utterance,
                location,
                units,
                json,
            } => {
                let mut config = Config::load_from(&config_path)?;
                config.apply_env();

                let map_path = self.map.unwrap_or_else(|| config.voice.condition_map.clone());
                let conditions = ConditionMap::load(&map_path).unwrap_or_else(|err| {
                    tracing::warn!("Using empty condition map: {err:#}");
                    ConditionMap::default()
                });

                let bot_location = location.unwrap_or(config.voice.default_location);
                let bot_units = units.unwrap_or(config.voice.units);

                let fetcher = WeatherFetcher::new(config.openweather, conditions)?;
                let result = fetcher.answer(&utterance, &bot_location, &bot_units).await;

                print_result(result, json)?;
            }
            Command::Configure => configure(&config_path)?,
            Command::ConfigPath => println!("{}", config_path.display()),
        }

        Ok(())
    }
}

fn print_result(result: WeatherResult, json: bool) -> anyhow::Result<()> {
    if json {
        let out =
            serde_json::to_string_pretty(&result).context("Failed to serialize weather result")?;
        println!("{out}");
        return Ok(());
    }

    let (condition, is_forecast, local_datetime, location, temperature, unit) =
        result.into_tuple();
    println!("condition:   {condition}");
    println!("forecast:    {is_forecast}");
    println!("datetime:    {local_datetime}");
    println!("location:    {location}");
    println!("temperature: {temperature} {unit}");
    Ok(())
}

fn configure(path: &Path) -> anyhow::Result<()> {
    let mut config = Config::load_from(path)?;
    let current = &config.openweather;

    let enabled = Confirm::new("Enable OpenWeather lookups?")
        .with_default(current.enabled)
        .prompt()?;

    let api_key = Password::new("OpenWeather API key (leave empty to keep current):")
        .without_confirmation()
        .prompt()?;

    let country = Text::new("Default country code:")
        .with_default(&current.default_country)
        .prompt()?;

    let location = Text::new("Default bot location:")
        .with_default(&config.voice.default_location)
        .prompt()?;

    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }
    config.openweather.enabled = enabled;
    config.openweather.default_country = country.trim().to_string();
    config.voice.default_location = location.trim().to_string();

    config.save_to(path)?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}
