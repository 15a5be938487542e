use crate::models::{EnvironmentSnapshot, Transport, UserType};

/// Wind below this speed (m/s) has no chilling effect
pub const WIND_CHILL_THRESHOLD: f64 = 1.0;
/// Humidity chill only applies at or below this raw temperature (°C)
pub const HUMID_CHILL_MAX_TEMP: f64 = 12.0;
pub const HUMID_CHILL_MIN_HUMIDITY: f64 = 60.0;
/// °C lost per 10 percentage points of humidity above the threshold
pub const HUMID_CHILL_PER_10_PERCENT: f64 = 0.4;
/// Body heat from walking
pub const WALKING_WARMTH_BONUS: f64 = 3.5;
pub const SUNSHINE_BONUS: f64 = 2.0;
pub const SENSITIVITY_SHIFT: f64 = 3.0;
pub const COLD_SEASON_SHIFT: f64 = 1.0;

/// Degrees the wind takes off the air temperature
pub fn wind_chill(wind_speed: f64) -> f64 {
    (wind_speed - WIND_CHILL_THRESHOLD).max(0.0)
}

/// Degrees that damp air takes off a cold hour
pub fn humidity_chill(raw_temp: f64, humidity: f64) -> f64 {
    if raw_temp <= HUMID_CHILL_MAX_TEMP && humidity >= HUMID_CHILL_MIN_HUMIDITY {
        (humidity - HUMID_CHILL_MIN_HUMIDITY) / 10.0 * HUMID_CHILL_PER_10_PERCENT
    } else {
        0.0
    }
}

pub fn sensitivity_shift(user_type: UserType) -> f64 {
    match user_type {
        UserType::ColdSensitive => -SENSITIVITY_SHIFT,
        UserType::Normal => 0.0,
        UserType::HeatSensitive => SENSITIVITY_SHIFT,
    }
}

pub fn transport_bonus(transport: Transport) -> f64 {
    match transport {
        Transport::Walk => WALKING_WARMTH_BONUS,
        Transport::Train | Transport::Car => 0.0,
    }
}

/// Temperature as it feels outdoors: wind chill and sunshine only
pub fn outdoor_feel(raw_temp: f64, env: &EnvironmentSnapshot) -> f64 {
    let sun = if env.weather_code.is_clear() {
        SUNSHINE_BONUS
    } else {
        0.0
    };
    raw_temp - wind_chill(env.wind_speed) + sun
}

/// Full per-hour effective temperature used by the penalty scorer
pub fn effective_temperature(raw_temp: f64, env: &EnvironmentSnapshot) -> f64 {
    let season = if env.is_cold_season() {
        COLD_SEASON_SHIFT
    } else {
        0.0
    };

    outdoor_feel(raw_temp, env) - humidity_chill(raw_temp, env.humidity)
        + transport_bonus(env.transport)
        + sensitivity_shift(env.user_type)
        - season
}

/// Coldest hour of the window as the wearer feels it standing still
pub fn min_effective_temperature(env: &EnvironmentSnapshot) -> f64 {
    outdoor_feel(env.min_temp(), env) + sensitivity_shift(env.user_type)
}
