use super::environment::WeatherCode;
use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Today's hourly forecast from Open-Meteo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherForecast {
    pub fetched_at: DateTime<Utc>,
    pub location: ForecastLocation,
    pub hourly: Vec<ForecastPoint>,
    pub current: CurrentWeather,
}

impl WeatherForecast {
    /// Points of the first 24 hours whose clock hour is in `start..=end`.
    ///
    /// An end hour earlier than the start means "until the end of the day".
    pub fn window(&self, start_hour: u32, end_hour: u32) -> Vec<&ForecastPoint> {
        let end = if end_hour >= start_hour { end_hour } else { 23 };
        self.hourly
            .iter()
            .take(24)
            .filter(|p| (start_hour..=end).contains(&p.time.hour()))
            .collect()
    }

    /// Mean relative humidity over the window, if any points carry it
    pub fn average_humidity(&self, start_hour: u32, end_hour: u32) -> Option<f64> {
        let values: Vec<f64> = self
            .window(start_hour, end_hour)
            .iter()
            .filter_map(|p| p.humidity_percent)
            .collect();

        if values.is_empty() {
            None
        } else {
            Some(values.iter().sum::<f64>() / values.len() as f64)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// A single hourly forecast point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub time: NaiveDateTime,
    pub temp_c: f64,
    pub humidity_percent: Option<f64>,
    pub weather_code: Option<WeatherCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temp_c: f64,
    /// m/s
    pub wind_speed: f64,
    pub weather_code: WeatherCode,
}
