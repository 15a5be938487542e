use super::PenaltyRule;
use crate::models::{EnvironmentSnapshot, GarmentCategory, Transport, WardrobeItem, WearLog, Weight};

pub const HEAVY_WALK_PENALTY: f64 = 50.0;
pub const LIGHT_WALK_BONUS: f64 = -25.0;
pub const BULKY_CAR_PENALTY: f64 = 20.0;

/// Transport rule - matches garment bulk to how the wearer travels
///
/// Adjustments:
/// - Walking: heavy garments +50, light garments -25
/// - Car: down, thick blouson, wool coat and trench +20
/// - Train: none
pub struct TransportRule;

impl PenaltyRule for TransportRule {
    fn id(&self) -> &'static str {
        "transport"
    }

    fn name(&self) -> &'static str {
        "Transport Mode"
    }

    fn evaluate(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        _history: &[WearLog],
    ) -> f64 {
        match env.transport {
            Transport::Walk => match item.weight {
                Weight::Heavy => HEAVY_WALK_PENALTY,
                Weight::Normal => 0.0,
                Weight::Light => LIGHT_WALK_BONUS,
            },
            Transport::Car if GarmentCategory::is_bulky(item.category_id) => BULKY_CAR_PENALTY,
            Transport::Car | Transport::Train => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(transport: Transport) -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(vec![10.0], 9, 9, 4)
            .unwrap()
            .with_transport(transport)
    }

    #[test]
    fn walking_weighs_garments() {
        let heavy = WardrobeItem::new("a", 6, "Coat").with_weight(Weight::Heavy);
        let light = WardrobeItem::new("b", 4, "Parka").with_weight(Weight::Light);
        let normal = WardrobeItem::new("c", 5, "Jacket");

        assert_eq!(TransportRule.evaluate(&heavy, &env(Transport::Walk), &[]), 50.0);
        assert_eq!(TransportRule.evaluate(&light, &env(Transport::Walk), &[]), -25.0);
        assert_eq!(TransportRule.evaluate(&normal, &env(Transport::Walk), &[]), 0.0);
    }

    #[test]
    fn car_penalizes_bulky_categories() {
        for category in [1, 2, 6, 7] {
            let item = WardrobeItem::new("a", category, "");
            assert_eq!(TransportRule.evaluate(&item, &env(Transport::Car), &[]), 20.0);
        }
        for category in [3, 4, 5, 8] {
            let item = WardrobeItem::new("a", category, "");
            assert_eq!(TransportRule.evaluate(&item, &env(Transport::Car), &[]), 0.0);
        }
    }

    #[test]
    fn train_is_neutral() {
        let heavy = WardrobeItem::new("a", 1, "Down").with_weight(Weight::Heavy);
        assert_eq!(TransportRule.evaluate(&heavy, &env(Transport::Train), &[]), 0.0);
    }
}
