use super::PenaltyRule;
use crate::models::{EnvironmentSnapshot, WardrobeItem, WearLog, WindResistance};

/// Wind speed (m/s) at which wind behaviour of a garment starts to matter
pub const STRONG_WIND_THRESHOLD: f64 = 5.0;
pub const WINDPROOF_BONUS: f64 = -20.0;
pub const BREATHABLE_PENALTY: f64 = 40.0;
pub const HOOD_WIND_BONUS: f64 = -15.0;

/// Wind rule - favours wind-blocking fabrics and hoods on gusty days
///
/// Conditions:
/// - Wind speed >= 5 m/s
///
/// Adjustments:
/// - Wind-blocking fabric (labelled "bad"): -20
/// - Breathable fabric (labelled "good"): +40
/// - Hood: -15
pub struct WindRule;

impl PenaltyRule for WindRule {
    fn id(&self) -> &'static str {
        "wind"
    }

    fn name(&self) -> &'static str {
        "Strong Wind"
    }

    fn evaluate(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        _history: &[WearLog],
    ) -> f64 {
        if env.wind_speed < STRONG_WIND_THRESHOLD {
            return 0.0;
        }

        let fabric = match item.wind_resistance {
            WindResistance::Bad => WINDPROOF_BONUS,
            WindResistance::Normal => 0.0,
            WindResistance::Good => BREATHABLE_PENALTY,
        };
        let hood = if item.has_hood { HOOD_WIND_BONUS } else { 0.0 };

        fabric + hood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(wind: f64) -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(vec![8.0], 9, 9, 4)
            .unwrap()
            .with_wind(wind)
    }

    #[test]
    fn calm_day_has_no_effect() {
        let item = WardrobeItem::new("a", 3, "Shell")
            .with_wind_resistance(WindResistance::Good)
            .with_hood(true);
        assert_eq!(WindRule.evaluate(&item, &env(4.9), &[]), 0.0);
    }

    #[test]
    fn windproof_with_hood_stacks() {
        let item = WardrobeItem::new("a", 3, "Shell")
            .with_wind_resistance(WindResistance::Bad)
            .with_hood(true);
        assert_eq!(WindRule.evaluate(&item, &env(5.0), &[]), -35.0);
    }

    #[test]
    fn breathable_is_penalized() {
        let item = WardrobeItem::new("a", 8, "Knit").with_wind_resistance(WindResistance::Good);
        assert_eq!(WindRule.evaluate(&item, &env(8.0), &[]), 40.0);
    }
}
