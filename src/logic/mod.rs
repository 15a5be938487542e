pub mod advisory;
pub mod calculations;
pub mod fallback;
pub mod recommender;
pub mod rules;
pub mod scorer;
pub mod weather_sync;

pub use recommender::Recommender;
pub use weather_sync::{Outing, WeatherSyncService};
