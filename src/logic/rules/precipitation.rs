use super::PenaltyRule;
use crate::models::{ComfortProfile, EnvironmentSnapshot, WardrobeItem, WearLog};

pub const NO_HOOD_PENALTY: f64 = 50.0;
pub const NOT_RAIN_RESISTANT_PENALTY: f64 = 90.0;

/// Precipitation rule - keeps unprotected garments home on wet days
///
/// Conditions:
/// - Weather code in the rain (51-67), shower (80-99) or snow (71-77) range
///
/// Adjustments:
/// - No hood: +50
/// - Category not rain resistant: +90
pub struct PrecipitationRule;

impl PenaltyRule for PrecipitationRule {
    fn id(&self) -> &'static str {
        "precipitation"
    }

    fn name(&self) -> &'static str {
        "Rain or Snow"
    }

    fn evaluate(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        _history: &[WearLog],
    ) -> f64 {
        if !env.weather_code.is_bad_weather() {
            return 0.0;
        }

        let mut penalty = 0.0;
        if !item.has_hood {
            penalty += NO_HOOD_PENALTY;
        }
        if !ComfortProfile::for_category(item.category_id).rain_resistant {
            penalty += NOT_RAIN_RESISTANT_PENALTY;
        }
        penalty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(code: u16) -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(vec![10.0], 9, 9, 4)
            .unwrap()
            .with_weather_code(code)
    }

    #[test]
    fn dry_weather_has_no_effect() {
        let item = WardrobeItem::new("a", 5, "Blazer");
        assert_eq!(PrecipitationRule.evaluate(&item, &env(3), &[]), 0.0);
        assert_eq!(PrecipitationRule.evaluate(&item, &env(45), &[]), 0.0);
    }

    #[test]
    fn unprotected_garment_in_rain() {
        let item = WardrobeItem::new("a", 5, "Blazer");
        assert_eq!(PrecipitationRule.evaluate(&item, &env(61), &[]), 140.0);
    }

    #[test]
    fn hooded_rain_shell_in_snow() {
        let item = WardrobeItem::new("a", 4, "Parka").with_hood(true);
        assert_eq!(PrecipitationRule.evaluate(&item, &env(73), &[]), 0.0);
    }

    #[test]
    fn rain_resistant_without_hood_in_showers() {
        let item = WardrobeItem::new("a", 7, "Trench");
        assert_eq!(PrecipitationRule.evaluate(&item, &env(81), &[]), 50.0);
    }

    #[test]
    fn unknown_category_is_not_rain_resistant() {
        let item = WardrobeItem::new("a", 12, "Poncho").with_hood(true);
        assert_eq!(PrecipitationRule.evaluate(&item, &env(63), &[]), 90.0);
    }
}
