use super::environment::EnvironmentSnapshot;
use super::wardrobe::WardrobeItem;
use super::wear_log::WearLog;
use chrono::NaiveDate;
use serde::Serialize;

/// Outcome of one recommendation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub item: WardrobeItem,
    /// True when `item` is a synthesized ideal garment, not one the user owns
    pub is_recommendation: bool,
    /// 0-100, higher is better
    pub score: u8,
    /// Winning penalty; absent for synthesized garments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty: Option<f64>,
    pub inner: String,
    pub advice: String,
    pub min_temp: f64,
    pub max_temp: f64,
}

impl Suggestion {
    /// Build the history entry recorded when the user decides to wear this
    /// suggestion.
    pub fn to_wear_log(
        &self,
        id: impl Into<String>,
        date: NaiveDate,
        env: &EnvironmentSnapshot,
    ) -> WearLog {
        WearLog::new(id, date, self.item.name.clone(), self.min_temp, self.max_temp)
            .with_color(self.item.color.clone())
            .with_outing(env.transport, env.start_hour, env.end_hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transport;

    #[test]
    fn wear_log_carries_decision_context() {
        let env = EnvironmentSnapshot::new(vec![3.0, 7.0], 8, 9, 12)
            .unwrap()
            .with_transport(Transport::Walk);
        let suggestion = Suggestion {
            item: WardrobeItem::new("x", 6, "Camel coat").with_color("#d4b483"),
            is_recommendation: false,
            score: 88,
            penalty: Some(12.0),
            inner: String::new(),
            advice: String::new(),
            min_temp: env.min_temp(),
            max_temp: env.max_temp(),
        };

        let date = NaiveDate::from_ymd_opt(2025, 12, 3).unwrap();
        let log = suggestion.to_wear_log("log-1", date, &env);
        assert_eq!(log.item_name, "Camel coat");
        assert_eq!(log.item_color.as_deref(), Some("#d4b483"));
        assert_eq!(log.min_temp, 3.0);
        assert_eq!(log.max_temp, 7.0);
        assert_eq!(log.transport, Some(Transport::Walk));
        assert_eq!(log.start_hour, Some(8));
        assert!(log.rating.is_none());
    }
}
