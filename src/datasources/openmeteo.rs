use crate::config::{LocationConfig, OpenMeteoConfig};
use crate::error::{ConciergeError, Result};
use crate::models::{CurrentWeather, ForecastLocation, ForecastPoint, WeatherCode, WeatherForecast};
use chrono::{NaiveDateTime, Utc};
use serde::Deserialize;
use std::time::Duration;

const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,weathercode";
const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

pub struct OpenMeteoClient {
    client: reqwest::Client,
    config: OpenMeteoConfig,
}

// Open-Meteo API response structures
#[derive(Debug, Deserialize)]
struct OmForecastResponse {
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    timezone: String,
    hourly: OmHourly,
    current_weather: OmCurrentWeather,
}

#[derive(Debug, Deserialize)]
struct OmHourly {
    time: Vec<String>,
    temperature_2m: Vec<Option<f64>>,
    #[serde(default)]
    relative_humidity_2m: Vec<Option<f64>>,
    #[serde(default)]
    weathercode: Vec<Option<u16>>,
}

#[derive(Debug, Deserialize)]
struct OmCurrentWeather {
    temperature: f64,
    windspeed: f64,
    weathercode: u16,
}

#[derive(Debug, Deserialize)]
struct OmGeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodedPlace>,
}

/// A place returned by the Open-Meteo geocoding search
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodedPlace {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub admin1: Option<String>,
}

impl GeocodedPlace {
    /// "Name, Region, Country" with missing parts skipped
    pub fn label(&self) -> String {
        [Some(&self.name), self.admin1.as_ref(), self.country.as_ref()]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl OpenMeteoClient {
    pub fn new(config: OpenMeteoConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Fetch today's hourly forecast and current conditions for `location`
    pub async fn fetch_forecast(&self, location: &LocationConfig) -> Result<WeatherForecast> {
        let url = reqwest::Url::parse_with_params(
            &self.config.forecast_url,
            &[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("hourly", HOURLY_FIELDS.to_string()),
                ("current_weather", "true".to_string()),
                ("windspeed_unit", "ms".to_string()),
                ("forecast_days", "1".to_string()),
                ("timezone", self.config.timezone.clone()),
            ],
        )
        .map_err(|e| ConciergeError::Config(format!("Invalid forecast URL: {}", e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ConciergeError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ConciergeError::DataSourceUnavailable(format!(
                "Open-Meteo returned {}: {}",
                status, body
            )));
        }

        let om_response: OmForecastResponse = response.json().await.map_err(|e| {
            ConciergeError::DataSourceUnavailable(format!(
                "Failed to parse Open-Meteo response: {}",
                e
            ))
        })?;

        let forecast = convert_forecast(om_response, &location.name)?;
        tracing::debug!(
            hours = forecast.hourly.len(),
            location = %forecast.location.name,
            "Fetched Open-Meteo forecast"
        );
        Ok(forecast)
    }

    /// Best match for a free-text place name, if any
    pub async fn geocode(&self, query: &str) -> Result<Option<GeocodedPlace>> {
        let url = reqwest::Url::parse_with_params(
            &self.config.geocoding_url,
            &[("name", query), ("count", "1"), ("format", "json")],
        )
        .map_err(|e| ConciergeError::Config(format!("Invalid geocoding URL: {}", e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                ConciergeError::DataSourceUnavailable(format!("Open-Meteo geocoding: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(ConciergeError::DataSourceUnavailable(format!(
                "Open-Meteo geocoding returned {}",
                response.status()
            )));
        }

        let body: OmGeocodingResponse = response.json().await?;
        Ok(body.results.into_iter().next())
    }

    /// Test connection to the Open-Meteo forecast API
    pub async fn test_connection(&self, location: &LocationConfig) -> Result<bool> {
        let url = reqwest::Url::parse_with_params(
            &self.config.forecast_url,
            &[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("current_weather", "true".to_string()),
            ],
        )
        .map_err(|e| ConciergeError::Config(format!("Invalid forecast URL: {}", e)))?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ConciergeError::DataSourceUnavailable(format!("Open-Meteo: {}", e)))?;

        Ok(response.status().is_success())
    }
}

fn convert_forecast(response: OmForecastResponse, name: &str) -> Result<WeatherForecast> {
    let hourly = response.hourly;
    let mut points = Vec::with_capacity(hourly.time.len());

    for (i, time) in hourly.time.iter().enumerate() {
        let time = NaiveDateTime::parse_from_str(time, TIME_FORMAT).map_err(|e| {
            ConciergeError::InvalidData(format!("bad forecast timestamp {:?}: {}", time, e))
        })?;

        // Hours without a temperature can't be scored
        let Some(temp_c) = hourly.temperature_2m.get(i).copied().flatten() else {
            tracing::warn!(%time, "Forecast hour has no temperature, skipping");
            continue;
        };

        points.push(ForecastPoint {
            time,
            temp_c,
            humidity_percent: hourly.relative_humidity_2m.get(i).copied().flatten(),
            weather_code: hourly.weathercode.get(i).copied().flatten().map(WeatherCode),
        });
    }

    Ok(WeatherForecast {
        fetched_at: Utc::now(),
        location: ForecastLocation {
            name: name.to_string(),
            latitude: response.latitude,
            longitude: response.longitude,
            timezone: response.timezone,
        },
        hourly: points,
        current: CurrentWeather {
            temp_c: response.current_weather.temperature,
            wind_speed: response.current_weather.windspeed,
            weather_code: WeatherCode(response.current_weather.weathercode),
        },
    })
}
