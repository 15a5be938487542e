use crate::config::Config;
use crate::datasources::OpenMeteoClient;
use crate::error::{ConciergeError, Result};
use crate::models::{EnvironmentSnapshot, Transport, UserType, WeatherForecast};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Humidity assumed when the forecast window carries none
pub const FALLBACK_HUMIDITY: f64 = 50.0;

/// The outing a snapshot is built for
#[derive(Debug, Clone, Copy)]
pub struct Outing {
    pub start_hour: u32,
    pub end_hour: u32,
    pub transport: Transport,
    pub user_type: UserType,
    pub month: u32,
}

pub struct WeatherSyncService {
    config: Config,
    client: OpenMeteoClient,
    current_forecast: Arc<RwLock<Option<WeatherForecast>>>,
}

impl WeatherSyncService {
    pub fn new(config: Config) -> Result<Self> {
        let client = OpenMeteoClient::new(config.openmeteo.clone())?;
        tracing::info!(location = %config.location.name, "Open-Meteo client configured");

        Ok(Self {
            config,
            client,
            current_forecast: Arc::new(RwLock::new(None)),
        })
    }

    pub async fn refresh_forecast(&self) -> Result<WeatherForecast> {
        let forecast = self.client.fetch_forecast(&self.config.location).await?;
        let mut current_forecast = self.current_forecast.write().await;
        *current_forecast = Some(forecast.clone());
        tracing::debug!("Weather forecast updated");
        Ok(forecast)
    }

    pub async fn get_current_forecast(&self) -> Option<WeatherForecast> {
        self.current_forecast.read().await.clone()
    }

    /// Environment for `outing`, fetching a forecast if none is cached
    pub async fn snapshot(&self, outing: Outing) -> Result<EnvironmentSnapshot> {
        let forecast = match self.get_current_forecast().await {
            Some(forecast) => forecast,
            None => self.refresh_forecast().await?,
        };
        build_snapshot(&forecast, outing)
    }

    pub async fn check_connection(&self) -> bool {
        match self.client.test_connection(&self.config.location).await {
            Ok(ok) => ok,
            Err(e) => {
                tracing::warn!("Open-Meteo connection check failed: {}", e);
                false
            }
        }
    }
}

/// Turn a forecast into the engine's view of one outing
pub fn build_snapshot(forecast: &WeatherForecast, outing: Outing) -> Result<EnvironmentSnapshot> {
    let temps: Vec<f64> = forecast
        .window(outing.start_hour, outing.end_hour)
        .iter()
        .map(|p| p.temp_c)
        .collect();

    if temps.is_empty() {
        return Err(ConciergeError::InvalidData(format!(
            "forecast has no hours between {}:00 and {}:00",
            outing.start_hour, outing.end_hour
        )));
    }

    let humidity = forecast
        .average_humidity(outing.start_hour, outing.end_hour)
        .unwrap_or(FALLBACK_HUMIDITY);

    let snapshot =
        EnvironmentSnapshot::new(temps, outing.start_hour, outing.end_hour, outing.month)?
            .with_wind(forecast.current.wind_speed)
            .with_humidity(humidity)
            .with_weather_code(forecast.current.weather_code.0)
            .with_transport(outing.transport)
            .with_user_type(outing.user_type);

    tracing::debug!(
        hours = snapshot.hour_count(),
        min = snapshot.min_temp(),
        max = snapshot.max_temp(),
        wind = snapshot.wind_speed,
        humidity,
        weather = %snapshot.weather_code,
        "Built environment snapshot"
    );

    Ok(snapshot)
}
