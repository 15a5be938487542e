use super::{
    feedback::FeedbackRule, precipitation::PrecipitationRule, transport::TransportRule,
    wind::WindRule, PenaltyRule,
};
use crate::models::{EnvironmentSnapshot, WardrobeItem, WearLog};

pub struct RulesEngine {
    rules: Vec<Box<dyn PenaltyRule>>,
}

impl RulesEngine {
    pub fn new() -> Self {
        let rules: Vec<Box<dyn PenaltyRule>> = vec![
            Box::new(WindRule),
            Box::new(TransportRule),
            Box::new(PrecipitationRule),
            Box::new(FeedbackRule),
        ];

        Self { rules }
    }

    /// Sum of every rule's adjustment for `item`
    pub fn evaluate(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        history: &[WearLog],
    ) -> f64 {
        self.breakdown(item, env, history)
            .into_iter()
            .map(|(_, delta)| delta)
            .sum()
    }

    /// Non-zero adjustments keyed by rule id
    pub fn breakdown(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        history: &[WearLog],
    ) -> Vec<(&'static str, f64)> {
        self.rules
            .iter()
            .map(|rule| (rule.id(), rule.evaluate(item, env, history)))
            .filter(|(_, delta)| *delta != 0.0)
            .collect()
    }

    pub fn list_rules(&self) -> Vec<(&'static str, &'static str)> {
        self.rules.iter().map(|r| (r.id(), r.name())).collect()
    }
}

impl Default for RulesEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transport, Weight, WindResistance};

    #[test]
    fn all_rules_registered() {
        let ids: Vec<&str> = RulesEngine::new().list_rules().iter().map(|(id, _)| *id).collect();
        assert_eq!(ids, vec!["wind", "transport", "precipitation", "feedback"]);
    }

    #[test]
    fn adjustments_are_summed() {
        let env = EnvironmentSnapshot::new(vec![9.0], 9, 9, 4)
            .unwrap()
            .with_wind(7.0)
            .with_weather_code(63)
            .with_transport(Transport::Walk);
        let item = WardrobeItem::new("a", 5, "Blazer")
            .with_wind_resistance(WindResistance::Good)
            .with_weight(Weight::Light);

        let engine = RulesEngine::new();
        // +40 breathable, -25 light walk, +50 no hood, +90 not rain resistant
        assert_eq!(engine.evaluate(&item, &env, &[]), 155.0);
        let breakdown = engine.breakdown(&item, &env, &[]);
        assert_eq!(breakdown.len(), 3);
        assert_eq!(breakdown[0], ("wind", 40.0));
    }
}
