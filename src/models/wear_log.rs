use super::environment::Transport;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rating {
    Good,
    Ok,
    Bad,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Good => "good",
            Rating::Ok => "ok",
            Rating::Bad => "bad",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "good" | "warm" | "comfortable" => Some(Rating::Good),
            "ok" | "okay" | "fine" => Some(Rating::Ok),
            "bad" | "cold" | "hot" => Some(Rating::Bad),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Rating::Good => "☺",
            Rating::Ok => "😐",
            Rating::Bad => "☹",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A record of what was worn on a given day and how it felt.
///
/// Logs are joined to wardrobe items by `item_name`, not id, so renaming an
/// item detaches its history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WearLog {
    pub id: String,
    pub date: NaiveDate,
    pub item_name: String,
    #[serde(default)]
    pub item_color: Option<String>,
    pub min_temp: f64,
    pub max_temp: f64,
    #[serde(default)]
    pub transport: Option<Transport>,
    #[serde(default)]
    pub start_hour: Option<u32>,
    #[serde(default)]
    pub end_hour: Option<u32>,
    #[serde(default)]
    pub rating: Option<Rating>,
    pub created_at: DateTime<Utc>,
}

impl WearLog {
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        item_name: impl Into<String>,
        min_temp: f64,
        max_temp: f64,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            item_name: item_name.into(),
            item_color: None,
            min_temp,
            max_temp,
            transport: None,
            start_hour: None,
            end_hour: None,
            rating: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.item_color = Some(color.into());
        self
    }

    pub fn with_outing(mut self, transport: Transport, start_hour: u32, end_hour: u32) -> Self {
        self.transport = Some(transport);
        self.start_hour = Some(start_hour);
        self.end_hour = Some(end_hour);
        self
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn is_rated(&self) -> bool {
        self.rating.is_some()
    }
}
