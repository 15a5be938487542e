use super::PenaltyRule;
use crate::models::{EnvironmentSnapshot, Rating, WardrobeItem, WearLog};

/// Logs recorded within this many °C of today's minimum count as comparable
pub const FEEDBACK_TEMP_TOLERANCE: f64 = 4.0;
pub const GOOD_RATING_BONUS: f64 = -150.0;
pub const BAD_RATING_PENALTY: f64 = 150.0;

/// Feedback rule - learns from past ratings of the same garment
///
/// A log counts when its item name equals the garment name exactly and its
/// recorded minimum is within 4°C of the window minimum. Every matching log
/// contributes; they are summed, not averaged.
///
/// Adjustments per matching log:
/// - good: -150
/// - bad: +150
/// - ok or unrated: 0
pub struct FeedbackRule;

impl PenaltyRule for FeedbackRule {
    fn id(&self) -> &'static str {
        "feedback"
    }

    fn name(&self) -> &'static str {
        "Wear History"
    }

    fn evaluate(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        history: &[WearLog],
    ) -> f64 {
        let window_min = env.min_temp();

        history
            .iter()
            .filter(|log| log.item_name == item.name)
            .filter(|log| (log.min_temp - window_min).abs() <= FEEDBACK_TEMP_TOLERANCE)
            .map(|log| match log.rating {
                Some(Rating::Good) => GOOD_RATING_BONUS,
                Some(Rating::Bad) => BAD_RATING_PENALTY,
                Some(Rating::Ok) | None => 0.0,
            })
            .sum()
    }
}
