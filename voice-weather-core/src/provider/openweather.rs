use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{WeatherError, WeatherObservation};

use super::WeatherProvider;

pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
const CURRENT_WEATHER_PATH: &str = "/data/2.5/weather";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String, http: Client) -> Self {
        Self {
            api_key,
            base_url: OPENWEATHER_BASE_URL.to_string(),
            http,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    async fn fetch_current(&self, location: &str) -> Result<OwCurrentResponse, WeatherError> {
        let url = format!("{}{}", self.base_url, CURRENT_WEATHER_PATH);

        let res = self
            .http
            .get(&url)
            .query(&[("appid", self.api_key.as_str()), ("q", location)])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Status {
                status,
                body: truncate_body(&body),
            });
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[derive(Debug, Default, Deserialize)]
#[allow(dead_code)]
struct OwCoord {
    lon: f64,
    lat: f64,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct OwWeather {
    #[serde(default)]
    id: i64,
    main: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct OwCurrentResponse {
    #[serde(default)]
    id: i64,
    #[serde(default)]
    name: String,
    #[serde(default)]
    coord: OwCoord,
    #[serde(default)]
    weather: Vec<OwWeather>,
    main: OwMain,
    #[serde(default)]
    dt: f64,
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_conditions(
        &self,
        location: &str,
    ) -> Result<WeatherObservation, WeatherError> {
        let parsed = self.fetch_current(location).await?;

        let condition = parsed
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| WeatherError::EmptyConditions(location.to_string()))?;

        Ok(WeatherObservation {
            condition_label: condition.main,
            temperature_kelvin: parsed.main.temp,
            location_name: parsed.name,
            timestamp_epoch: parsed.dt,
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &body[..end])
    } else {
        body.to_string()
    }
}
