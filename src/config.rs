use crate::datasources::OpenMeteoClient;
use crate::error::{ConciergeError, Result};
use crate::models::{Transport, UserType};
use dialoguer::{Confirm, Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "OUTER_CONCIERGE_DATA_DIR";
const APP_DIR: &str = "outer-concierge";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub location: LocationConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub openmeteo: OpenMeteoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocationConfig {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    #[serde(default)]
    pub sensitivity: UserType,
    #[serde(default)]
    pub transport: Transport,
    #[serde(default = "default_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_end_hour")]
    pub end_hour: u32,
}

fn default_start_hour() -> u32 {
    8
}

fn default_end_hour() -> u32 {
    18
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            sensitivity: UserType::default(),
            transport: Transport::default(),
            start_hour: default_start_hour(),
            end_hour: default_end_hour(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OpenMeteoConfig {
    #[serde(default = "default_forecast_url")]
    pub forecast_url: String,
    #[serde(default = "default_geocoding_url")]
    pub geocoding_url: String,
    /// IANA name, or "auto" to let Open-Meteo resolve it from the coordinates
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_forecast_url() -> String {
    "https://api.open-meteo.com/v1/forecast".into()
}

fn default_geocoding_url() -> String {
    "https://geocoding-api.open-meteo.com/v1/search".into()
}

fn default_timezone() -> String {
    "auto".into()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for OpenMeteoConfig {
    fn default() -> Self {
        Self {
            forecast_url: default_forecast_url(),
            geocoding_url: default_geocoding_url(),
            timezone: default_timezone(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn input_error(e: dialoguer::Error) -> ConciergeError {
    ConciergeError::Config(format!("Input error: {}", e))
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(ConciergeError::Config(format!(
                "Config file not found at {:?}. Run `outer-concierge init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| ConciergeError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML after `${VAR}` substitution and validate the result
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| ConciergeError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(-90.0..=90.0).contains(&self.location.latitude) {
            return Err(ConciergeError::Config(format!(
                "latitude {} out of range",
                self.location.latitude
            )));
        }
        if !(-180.0..=180.0).contains(&self.location.longitude) {
            return Err(ConciergeError::Config(format!(
                "longitude {} out of range",
                self.location.longitude
            )));
        }
        if self.profile.start_hour > 23 || self.profile.end_hour > 23 {
            return Err(ConciergeError::Config(
                "profile hours must be between 0 and 23".into(),
            ));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = Self::default_config_path()?;
        Ok(default_path)
    }

    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/outer-concierge/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConciergeError::Config("Cannot determine config directory".into()))?
            .join(APP_DIR);
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub async fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up Outer Concierge!");
        println!();

        let openmeteo = OpenMeteoConfig::default();

        // --- Location ---
        println!("Location");
        let query: String = Input::new()
            .with_prompt("  City (leave blank to enter coordinates)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;

        let geocoded = if query.trim().is_empty() {
            None
        } else {
            let client = OpenMeteoClient::new(openmeteo.clone())?;
            match client.geocode(query.trim()).await {
                Ok(Some(place)) => {
                    let label = place.label();
                    let accept = Confirm::new()
                        .with_prompt(format!(
                            "  Use {} ({:.3}, {:.3})?",
                            label, place.latitude, place.longitude
                        ))
                        .default(true)
                        .interact()
                        .map_err(input_error)?;
                    accept.then(|| LocationConfig {
                        name: label,
                        latitude: place.latitude,
                        longitude: place.longitude,
                    })
                }
                Ok(None) => {
                    println!("  No match for \"{}\"", query.trim());
                    None
                }
                Err(e) => {
                    tracing::warn!("Geocoding failed: {}", e);
                    println!("  Geocoding failed: {}", e);
                    None
                }
            }
        };

        let location = match geocoded {
            Some(location) => location,
            None => {
                let name: String = Input::new()
                    .with_prompt("  Name")
                    .default("Tokyo".into())
                    .interact_text()
                    .map_err(input_error)?;
                let latitude: f64 = Input::new()
                    .with_prompt("  Latitude")
                    .default(35.6895)
                    .interact_text()
                    .map_err(input_error)?;
                let longitude: f64 = Input::new()
                    .with_prompt("  Longitude")
                    .default(139.6917)
                    .interact_text()
                    .map_err(input_error)?;
                LocationConfig {
                    name,
                    latitude,
                    longitude,
                }
            }
        };

        println!();

        // --- Profile ---
        println!("Profile");
        let sensitivities = [UserType::Normal, UserType::ColdSensitive, UserType::HeatSensitive];
        let sensitivity_labels: Vec<&str> = sensitivities.iter().map(|u| u.label()).collect();
        let sensitivity = Select::new()
            .with_prompt("  How do you feel temperature?")
            .items(&sensitivity_labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let transports = [Transport::Train, Transport::Walk, Transport::Car];
        let transport_labels: Vec<&str> = transports.iter().map(|t| t.as_str()).collect();
        let transport = Select::new()
            .with_prompt("  Usual way of getting around")
            .items(&transport_labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        let start_hour: u32 = Input::new()
            .with_prompt("  Usually out from (hour)")
            .default(default_start_hour())
            .validate_with(|h: &u32| if *h <= 23 { Ok(()) } else { Err("0-23") })
            .interact_text()
            .map_err(input_error)?;
        let end_hour: u32 = Input::new()
            .with_prompt("  Usually back by (hour)")
            .default(default_end_hour())
            .validate_with(|h: &u32| if *h <= 23 { Ok(()) } else { Err("0-23") })
            .interact_text()
            .map_err(input_error)?;

        println!();

        let config = Config {
            location,
            profile: ProfileConfig {
                sensitivity: sensitivities[sensitivity],
                transport: transports[transport],
                start_hour,
                end_hour,
            },
            openmeteo,
        };

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| ConciergeError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# Outer Concierge Configuration\n# Generated by `outer-concierge init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| ConciergeError::Config("Cannot determine data directory".into()))?
            .join(APP_DIR);

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn db_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("wardrobe.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_gets_defaults() {
        let config = Config::parse(
            "location:\n  name: Osaka\n  latitude: 34.69\n  longitude: 135.50\n",
        )
        .unwrap();

        assert_eq!(config.location.name, "Osaka");
        assert_eq!(config.profile.sensitivity, UserType::Normal);
        assert_eq!(config.profile.transport, Transport::Train);
        assert_eq!(config.profile.start_hour, 8);
        assert_eq!(config.profile.end_hour, 18);
        assert_eq!(config.openmeteo.timezone, "auto");
        assert_eq!(config.openmeteo.timeout_secs, 10);
    }

    #[test]
    fn profile_labels_parse() {
        let config = Config::parse(
            "location:\n  name: Sapporo\n  latitude: 43.06\n  longitude: 141.35\n\
             profile:\n  sensitivity: cold_sensitive\n  transport: walk\n  start_hour: 7\n  end_hour: 21\n",
        )
        .unwrap();

        assert_eq!(config.profile.sensitivity, UserType::ColdSensitive);
        assert_eq!(config.profile.transport, Transport::Walk);
        assert_eq!(config.profile.end_hour, 21);
    }

    #[test]
    fn env_vars_are_substituted() {
        std::env::set_var("OUTER_CONCIERGE_TEST_LAT", "51.5");
        let config = Config::parse(
            "location:\n  name: London\n  latitude: ${OUTER_CONCIERGE_TEST_LAT}\n  longitude: -0.12\n",
        )
        .unwrap();
        assert_eq!(config.location.latitude, 51.5);
    }

    #[test]
    fn out_of_range_values_rejected() {
        let bad_lat = Config::parse("location:\n  name: X\n  latitude: 95\n  longitude: 0\n");
        assert!(matches!(bad_lat, Err(ConciergeError::Config(_))));

        let bad_hour = Config::parse(
            "location:\n  name: X\n  latitude: 0\n  longitude: 0\nprofile:\n  end_hour: 24\n",
        );
        assert!(bad_hour.is_err());
    }

    #[test]
    fn missing_file_is_config_error() {
        let err = Config::load(Some(PathBuf::from("/nonexistent/config.yaml"))).unwrap_err();
        assert!(err.to_string().contains("outer-concierge init"));
    }
}
