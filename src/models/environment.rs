use crate::error::{ConciergeError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    Walk,
    #[default]
    Train,
    Car,
}

impl Transport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Transport::Walk => "walk",
            Transport::Train => "train",
            Transport::Car => "car",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "walk" | "walking" | "foot" => Some(Transport::Walk),
            "train" | "rail" | "transit" => Some(Transport::Train),
            "car" | "drive" | "driving" => Some(Transport::Car),
            _ => None,
        }
    }
}

impl std::fmt::Display for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How the wearer perceives temperature relative to most people
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    ColdSensitive,
    #[default]
    Normal,
    HeatSensitive,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::ColdSensitive => "cold_sensitive",
            UserType::Normal => "normal",
            UserType::HeatSensitive => "heat_sensitive",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserType::ColdSensitive => "I get cold easily",
            UserType::Normal => "About average",
            UserType::HeatSensitive => "I get hot easily",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', ' '], "_").as_str() {
            "cold_sensitive" | "cold" | "coldsensitive" => Some(UserType::ColdSensitive),
            "normal" => Some(UserType::Normal),
            "heat_sensitive" | "heat" | "hot" | "heatsensitive" => Some(UserType::HeatSensitive),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse weather categories derived from WMO weather codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WeatherCondition {
    #[default]
    Clear,
    Clouds,
    Fog,
    Rain,
    Snow,
    Showers,
    Other,
}

impl WeatherCondition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Cloudy",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Showers => "Showers",
            WeatherCondition::Other => "Other",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "☀",
            WeatherCondition::Clouds => "☁",
            WeatherCondition::Fog => "🌫",
            WeatherCondition::Rain => "🌧",
            WeatherCondition::Snow => "❄",
            WeatherCondition::Showers => "⛈",
            WeatherCondition::Other => "?",
        }
    }
}

impl std::fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// WMO weather interpretation code as reported by Open-Meteo
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherCode(pub u16);

impl WeatherCode {
    pub fn condition(&self) -> WeatherCondition {
        match self.0 {
            0..=1 => WeatherCondition::Clear,
            2..=3 => WeatherCondition::Clouds,
            4..=48 => WeatherCondition::Fog,
            49..=67 => WeatherCondition::Rain,
            71..=77 => WeatherCondition::Snow,
            80..=99 => WeatherCondition::Showers,
            _ => WeatherCondition::Other,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.0 <= 1
    }

    pub fn is_rainy(&self) -> bool {
        matches!(self.0, 51..=67 | 80..=99)
    }

    pub fn is_snowy(&self) -> bool {
        matches!(self.0, 71..=77)
    }

    /// Rain or snow: anything that soaks an unhooded outer layer
    pub fn is_bad_weather(&self) -> bool {
        self.is_rainy() || self.is_snowy()
    }
}

impl std::fmt::Display for WeatherCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.condition().symbol(), self.condition())
    }
}

/// Weather and travel conditions for one outing.
///
/// The hourly series is guaranteed non-empty by construction, so window
/// minimum and maximum are always defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnvironmentSnapshot {
    hourly_temps: Vec<f64>,
    pub wind_speed: f64,
    pub humidity: f64,
    pub weather_code: WeatherCode,
    pub start_hour: u32,
    pub end_hour: u32,
    pub transport: Transport,
    pub user_type: UserType,
    /// Calendar month, 1 = January
    pub month: u32,
}

impl EnvironmentSnapshot {
    pub fn new(hourly_temps: Vec<f64>, start_hour: u32, end_hour: u32, month: u32) -> Result<Self> {
        if hourly_temps.is_empty() {
            return Err(ConciergeError::InvalidData(format!(
                "no hourly temperatures for window {}:00-{}:00",
                start_hour, end_hour
            )));
        }
        if hourly_temps.iter().any(|t| !t.is_finite()) {
            return Err(ConciergeError::InvalidData(
                "hourly temperatures must be finite".into(),
            ));
        }
        if !(1..=12).contains(&month) {
            return Err(ConciergeError::InvalidData(format!(
                "month {} out of range",
                month
            )));
        }

        Ok(Self {
            hourly_temps,
            wind_speed: 0.0,
            humidity: 50.0,
            weather_code: WeatherCode::default(),
            start_hour,
            end_hour,
            transport: Transport::default(),
            user_type: UserType::default(),
            month,
        })
    }

    pub fn with_wind(mut self, wind_speed: f64) -> Self {
        self.wind_speed = wind_speed.max(0.0);
        self
    }

    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.humidity = humidity.clamp(0.0, 100.0);
        self
    }

    pub fn with_weather_code(mut self, code: u16) -> Self {
        self.weather_code = WeatherCode(code);
        self
    }

    pub fn with_transport(mut self, transport: Transport) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_user_type(mut self, user_type: UserType) -> Self {
        self.user_type = user_type;
        self
    }

    pub fn hourly_temps(&self) -> &[f64] {
        &self.hourly_temps
    }

    pub fn hour_count(&self) -> usize {
        self.hourly_temps.len()
    }

    pub fn min_temp(&self) -> f64 {
        self.hourly_temps
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min)
    }

    pub fn max_temp(&self) -> f64 {
        self.hourly_temps
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max)
    }

    pub fn temp_swing(&self) -> f64 {
        self.max_temp() - self.min_temp()
    }

    /// October through February
    pub fn is_cold_season(&self) -> bool {
        matches!(self.month, 10..=12 | 1..=2)
    }

    /// Window starts or ends in the evening or at night
    pub fn touches_night(&self) -> bool {
        let is_night = |hour: u32| hour >= 18 || hour <= 5;
        is_night(self.start_hour) || is_night(self.end_hour)
    }
}
