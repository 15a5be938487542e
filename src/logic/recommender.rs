use super::advisory::advise;
use super::calculations::outdoor_feel;
use super::fallback::{ideal_garment, synthesize_fallback};
use super::scorer::PenaltyScorer;
use crate::models::{EnvironmentSnapshot, Suggestion, WardrobeItem, WearLog};

/// Owned garments scoring below this are replaced by an ideal category
pub const FALLBACK_SCORE_THRESHOLD: u8 = 60;
pub const MAX_SCORE: f64 = 100.0;
/// Penalty points per hour that cost one display point
pub const PENALTY_PER_SCORE_POINT: f64 = 2.0;

/// Bounded display score for a total penalty over `hour_count` hours
pub fn display_score(penalty: f64, hour_count: usize) -> u8 {
    let hours = hour_count.max(1) as f64;
    let score = MAX_SCORE - penalty / (hours * PENALTY_PER_SCORE_POINT);
    score.round().clamp(0.0, MAX_SCORE) as u8
}

/// Winning garment of a wardrobe before any fallback is considered
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredItem {
    pub item: WardrobeItem,
    pub penalty: f64,
    pub score: u8,
}

pub struct Recommender {
    scorer: PenaltyScorer,
}

impl Recommender {
    pub fn new() -> Self {
        Self {
            scorer: PenaltyScorer::new(),
        }
    }

    /// Minimum-penalty garment of `items`, first one on a tie.
    ///
    /// Returns `None` only when the wardrobe is empty.
    pub fn score_wardrobe(
        &self,
        items: &[WardrobeItem],
        env: &EnvironmentSnapshot,
        history: &[WearLog],
    ) -> Option<ScoredItem> {
        let mut best: Option<(&WardrobeItem, f64)> = None;
        for item in items {
            let penalty = self.scorer.penalty(item, env, history);
            match best {
                Some((_, best_penalty)) if penalty >= best_penalty => {}
                _ => best = Some((item, penalty)),
            }
        }

        best.map(|(item, penalty)| ScoredItem {
            item: item.clone(),
            penalty,
            score: display_score(penalty, env.hour_count()),
        })
    }

    /// Full suggestion for the outing, falling back to an ideal category when
    /// nothing owned is good enough
    pub fn recommend(
        &self,
        items: &[WardrobeItem],
        env: &EnvironmentSnapshot,
        history: &[WearLog],
    ) -> Suggestion {
        match self.score_wardrobe(items, env, history) {
            Some(best) if best.score >= FALLBACK_SCORE_THRESHOLD => {
                tracing::info!(item = %best.item.name, score = best.score, "Selected garment");
                self.build(best.item, false, best.score, Some(best.penalty), env)
            }
            best => {
                if let Some(ref best) = best {
                    tracing::info!(
                        item = %best.item.name,
                        score = best.score,
                        "Best owned garment below threshold, synthesizing ideal category"
                    );
                } else {
                    tracing::info!("Wardrobe is empty, synthesizing ideal category");
                }
                self.fallback(env)
            }
        }
    }

    /// Suggestion built around the ideal category for the outing
    pub fn fallback(&self, env: &EnvironmentSnapshot) -> Suggestion {
        let outdoor_min = outdoor_feel(env.min_temp(), env);
        let category_id = synthesize_fallback(outdoor_min, env.user_type);
        let item = ideal_garment(category_id);
        let score = display_score(self.scorer.penalty(&item, env, &[]), env.hour_count());
        self.build(item, true, score, None, env)
    }

    fn build(
        &self,
        item: WardrobeItem,
        is_recommendation: bool,
        score: u8,
        penalty: Option<f64>,
        env: &EnvironmentSnapshot,
    ) -> Suggestion {
        let advisory = advise(&item, env);
        Suggestion {
            item,
            is_recommendation,
            score,
            penalty,
            inner: advisory.inner,
            advice: advisory.advice,
            min_temp: env.min_temp(),
            max_temp: env.max_temp(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::advisory::{ADVICE_HEAT, INNER_LIGHT_KNIT};
    use crate::models::{
        Rating, Transport, UserType, CARDIGAN, HEAVY_DOWN, TAILORED_JACKET, THICK_BLOUSON,
    };
    use chrono::NaiveDate;

    fn cold_walk() -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(vec![2.0, 3.0, 1.0], 8, 10, 1)
            .unwrap()
            .with_wind(2.0)
            .with_humidity(50.0)
            .with_weather_code(1)
            .with_transport(Transport::Walk)
    }

    #[test]
    fn display_score_is_bounded() {
        assert_eq!(display_score(0.0, 3), 100);
        assert_eq!(display_score(30.0, 3), 95);
        assert_eq!(display_score(10_000.0, 3), 0);
        assert_eq!(display_score(-500.0, 3), 100);
        assert_eq!(display_score(3.0, 1), 99);
    }

    #[test]
    fn empty_wardrobe_scores_nothing() {
        let recommender = Recommender::new();
        assert!(recommender.score_wardrobe(&[], &cold_walk(), &[]).is_none());
    }

    #[test]
    fn empty_wardrobe_falls_back_to_down() {
        let env = EnvironmentSnapshot::new(vec![1.0, 0.0, -1.0], 7, 9, 1)
            .unwrap()
            .with_weather_code(3);
        let suggestion = Recommender::new().recommend(&[], &env, &[]);
        assert!(suggestion.is_recommendation);
        assert_eq!(suggestion.item.category_id, HEAVY_DOWN);
        assert!(suggestion.penalty.is_none());
    }

    #[test]
    fn single_down_jacket_on_cold_walk() {
        let down = WardrobeItem::new("down-1", 1, "Down jacket").with_warmth(3);
        let suggestion = Recommender::new().recommend(&[down], &cold_walk(), &[]);

        assert!(!suggestion.is_recommendation);
        assert_eq!(suggestion.item.id, "down-1");
        assert!(suggestion.score > 0);
        // coldest hour feels 2°C, down adds 10
        assert_eq!(suggestion.inner, INNER_LIGHT_KNIT);
        assert!(!suggestion.advice.contains(ADVICE_HEAT));
    }

    #[test]
    fn winner_always_comes_from_the_wardrobe() {
        let items = vec![
            WardrobeItem::new("a", 8, "Cardigan"),
            WardrobeItem::new("b", 5, "Blazer"),
            WardrobeItem::new("c", 1, "Down"),
            WardrobeItem::new("d", 77, "Unlabelled"),
        ];
        let scenarios = [
            vec![-10.0, -8.0],
            vec![5.0, 9.0, 12.0],
            vec![18.0, 21.0],
            vec![33.0, 35.0, 31.0],
        ];

        let recommender = Recommender::new();
        for temps in scenarios {
            let env = EnvironmentSnapshot::new(temps, 9, 12, 6).unwrap();
            let best = recommender.score_wardrobe(&items, &env, &[]).unwrap();
            assert!(items.iter().any(|i| i.id == best.item.id));
        }
    }

    #[test]
    fn ties_keep_the_first_item() {
        let items = vec![
            WardrobeItem::new("first", 4, "Same"),
            WardrobeItem::new("second", 4, "Same"),
        ];
        let env = EnvironmentSnapshot::new(vec![18.0], 12, 12, 5).unwrap();
        let best = Recommender::new().score_wardrobe(&items, &env, &[]).unwrap();
        assert_eq!(best.item.id, "first");
    }

    #[test]
    fn same_inputs_same_suggestion() {
        let items = vec![
            WardrobeItem::new("a", 2, "Blouson").with_warmth(4),
            WardrobeItem::new("b", 6, "Wool coat"),
        ];
        let env = cold_walk();

        let recommender = Recommender::new();
        let first = recommender.recommend(&items, &env, &[]);
        let second = recommender.recommend(&items, &env, &[]);
        assert_eq!(first.item.id, second.item.id);
        assert_eq!(first.score, second.score);
        assert_eq!(first.inner, second.inner);
        assert_eq!(first.advice, second.advice);
    }

    #[test]
    fn cold_sensitive_fallback_shifts_once() {
        // 8 feels like 5: down, thick blouson and wool coat hold it
        let env = EnvironmentSnapshot::new(vec![8.0, 9.0], 9, 10, 6)
            .unwrap()
            .with_weather_code(3)
            .with_user_type(UserType::ColdSensitive);
        let suggestion = Recommender::new().recommend(&[], &env, &[]);
        assert!(suggestion.is_recommendation);
        assert_eq!(suggestion.item.category_id, THICK_BLOUSON);
    }

    #[test]
    fn heat_sensitive_fallback_shifts_once() {
        // 17 feels like 20: tailored jacket's midpoint sits on it
        let env = EnvironmentSnapshot::new(vec![17.0, 19.0], 9, 10, 6)
            .unwrap()
            .with_weather_code(3)
            .with_user_type(UserType::HeatSensitive);
        let recommender = Recommender::new();
        assert_eq!(recommender.fallback(&env).item.category_id, TAILORED_JACKET);

        // 22 feels like 25, inside the cardigan band only
        let warm = EnvironmentSnapshot::new(vec![22.0, 24.0], 9, 10, 6)
            .unwrap()
            .with_weather_code(3)
            .with_user_type(UserType::HeatSensitive);
        assert_eq!(recommender.fallback(&warm).item.category_id, CARDIGAN);
    }

    #[test]
    fn poor_wardrobe_triggers_fallback() {
        let items = vec![WardrobeItem::new("a", 8, "Cardigan")];
        let env = EnvironmentSnapshot::new(vec![-6.0, -5.0, -7.0], 7, 9, 1)
            .unwrap()
            .with_weather_code(3);

        let recommender = Recommender::new();
        let best = recommender.score_wardrobe(&items, &env, &[]).unwrap();
        assert!(best.score < FALLBACK_SCORE_THRESHOLD);

        let suggestion = recommender.recommend(&items, &env, &[]);
        assert!(suggestion.is_recommendation);
        assert_eq!(suggestion.item.category_id, HEAVY_DOWN);
    }

    #[test]
    fn good_rating_can_flip_the_choice() {
        let items = vec![
            WardrobeItem::new("a", 3, "Leather"),
            WardrobeItem::new("b", 4, "Field jacket"),
        ];
        let env = EnvironmentSnapshot::new(vec![14.0, 16.0, 17.0], 10, 12, 5)
            .unwrap()
            .with_weather_code(3);

        let recommender = Recommender::new();
        let before = recommender.score_wardrobe(&items, &env, &[]).unwrap();
        let other = if before.item.id == "a" { "Field jacket" } else { "Leather" };

        let date = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        let logs = [WearLog::new("l", date, other, 14.0, 17.0).with_rating(Rating::Good)];
        let after = recommender.score_wardrobe(&items, &env, &logs).unwrap();
        assert_eq!(after.item.name, other);
    }
}
