use super::calculations::sensitivity_shift;
use crate::models::{GarmentCategory, UserType, WardrobeItem, CARDIGAN, CATEGORIES};

/// At or above this target only the lightest category makes sense
pub const LIGHTEST_ONLY_TEMP: f64 = 28.0;

/// Ideal category for a target temperature.
///
/// `outdoor_min` is the coldest hour adjusted for wind and sunshine only;
/// the wearer's sensitivity is applied here and nowhere upstream. Among categories whose band
/// holds the target, the one with the nearest midpoint wins (first on a tie).
/// When no band holds it, every category competes on midpoint distance.
pub fn synthesize_fallback(outdoor_min: f64, user_type: UserType) -> u8 {
    let target = outdoor_min + sensitivity_shift(user_type);
    if target >= LIGHTEST_ONLY_TEMP {
        return CARDIGAN;
    }

    let containing: Vec<&GarmentCategory> =
        CATEGORIES.iter().filter(|c| c.contains(target)).collect();
    let candidates: Vec<&GarmentCategory> = if containing.is_empty() {
        CATEGORIES.iter().collect()
    } else {
        containing
    };

    let mut best = candidates[0];
    let mut best_distance = (best.midpoint() - target).abs();
    for category in candidates.into_iter().skip(1) {
        let distance = (category.midpoint() - target).abs();
        if distance < best_distance {
            best = category;
            best_distance = distance;
        }
    }

    tracing::debug!(target, category = best.id, "Synthesized ideal category");
    best.id
}

/// Placeholder garment describing an ideal category the user may not own
pub fn ideal_garment(category_id: u8) -> WardrobeItem {
    let name = GarmentCategory::lookup(category_id)
        .map(|c| format!("Ideal: {}", c.name))
        .unwrap_or_else(|| "Ideal outer".to_string());

    WardrobeItem::new(format!("ideal-{}", category_id), category_id, name).with_color("#9ca3af")
}
