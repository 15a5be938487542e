use super::calculations::min_effective_temperature;
use super::rules::wind::STRONG_WIND_THRESHOLD;
use crate::models::{
    EnvironmentSnapshot, WardrobeItem, HEAVY_DOWN, NEUTRAL_WARMTH, THICK_BLOUSON, WOOL_COAT,
};

pub const DOWN_OUTER_BONUS: f64 = 10.0;
pub const HEAVY_OUTER_BONUS: f64 = 6.0;
pub const WARMTH_OUTER_BONUS: f64 = 2.0;

pub const HEAT_WARNING_TEMP: f64 = 30.0;
pub const WARM_DAY_TEMP: f64 = 25.0;
pub const LIGHT_INNER_MAX_TEMP: f64 = 13.0;
pub const LAYER_UP_TEMP: f64 = 5.0;
pub const LARGE_SWING: f64 = 10.0;

pub const INNER_HEAVY: &str = "Heat-retaining base layer with a thick knit";
pub const INNER_KNIT: &str = "Knit sweater or sweatshirt";
pub const INNER_LIGHT_KNIT: &str = "Shirt or light knit";
pub const INNER_LONG_SLEEVE: &str = "Long-sleeve tee or shirt";
pub const INNER_TEE: &str = "T-shirt or light undershirt";
pub const INNER_SHORT_SLEEVE: &str = "Short sleeves; skip the extra layers";

pub const ADVICE_HEAT: &str =
    "Heat warning: it will pass 30°C, so leave the outer at home when you are outdoors.";
pub const ADVICE_WARM: &str =
    "It gets warm; the outer is only for air-conditioned rooms or the evening.";
pub const ADVICE_LIGHT_INNER: &str =
    "The outer is warm enough on its own, so keep the inner layer light.";
pub const ADVICE_LAYER_UP: &str =
    "The outer alone won't be enough; layer up underneath.";
pub const ADVICE_UMBRELLA: &str = "Rain or snow is expected; bring an umbrella.";
pub const ADVICE_WIND: &str = "Strong wind will make it feel colder than the thermometer says.";
pub const ADVICE_SWING: &str =
    "Large temperature swing today; wear layers you can adjust.";
pub const ADVICE_NIGHT: &str = "It will be cold on the way back after dark.";
pub const ADVICE_DEFAULT: &str = "Comfortable all day. Enjoy your outing!";

#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub inner: String,
    pub advice: String,
}

/// How many degrees warmer the outer runs than a neutral garment
pub fn outer_bonus(item: &WardrobeItem) -> f64 {
    let category = match item.category_id {
        HEAVY_DOWN => DOWN_OUTER_BONUS,
        THICK_BLOUSON | WOOL_COAT => HEAVY_OUTER_BONUS,
        _ => 0.0,
    };
    let warmth = item
        .warmth
        .map(|w| (f64::from(w) - f64::from(NEUTRAL_WARMTH)) * WARMTH_OUTER_BONUS)
        .unwrap_or(0.0);

    category + warmth
}

pub fn inner_layer(judge_temp: f64, max_temp: f64) -> &'static str {
    if max_temp >= HEAT_WARNING_TEMP {
        INNER_SHORT_SLEEVE
    } else if judge_temp < 3.0 {
        INNER_HEAVY
    } else if judge_temp < 8.0 {
        INNER_KNIT
    } else if judge_temp < 15.0 {
        INNER_LIGHT_KNIT
    } else if judge_temp < 22.0 {
        INNER_LONG_SLEEVE
    } else {
        INNER_TEE
    }
}

/// Inner-layer suggestion and advice for wearing `item` during the outing
pub fn advise(item: &WardrobeItem, env: &EnvironmentSnapshot) -> Advisory {
    let bonus = outer_bonus(item);
    let min_effective = min_effective_temperature(env);
    let max_temp = env.max_temp();

    let inner = inner_layer(min_effective + bonus, max_temp);

    let mut sentences: Vec<&str> = Vec::new();

    if max_temp >= HEAT_WARNING_TEMP {
        sentences.push(ADVICE_HEAT);
    } else if max_temp >= WARM_DAY_TEMP {
        sentences.push(ADVICE_WARM);
    } else if bonus >= HEAVY_OUTER_BONUS && max_temp > LIGHT_INNER_MAX_TEMP {
        sentences.push(ADVICE_LIGHT_INNER);
    } else if min_effective < LAYER_UP_TEMP && bonus < 3.0 {
        sentences.push(ADVICE_LAYER_UP);
    }

    if env.weather_code.is_bad_weather() && !item.has_hood {
        sentences.push(ADVICE_UMBRELLA);
    }
    if env.wind_speed >= STRONG_WIND_THRESHOLD {
        sentences.push(ADVICE_WIND);
    }
    if env.temp_swing() > LARGE_SWING {
        sentences.push(ADVICE_SWING);
    }
    if env.touches_night() {
        sentences.push(ADVICE_NIGHT);
    }

    let advice = if sentences.is_empty() {
        ADVICE_DEFAULT.to_string()
    } else {
        sentences.join(" ")
    };

    Advisory {
        inner: inner.to_string(),
        advice,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transport;

    fn env(temps: Vec<f64>, start: u32, end: u32) -> EnvironmentSnapshot {
        EnvironmentSnapshot::new(temps, start, end, 5)
            .unwrap()
            .with_weather_code(3)
    }

    #[test]
    fn outer_bonus_by_category_and_warmth() {
        assert_eq!(outer_bonus(&WardrobeItem::new("a", 1, "")), 10.0);
        assert_eq!(outer_bonus(&WardrobeItem::new("a", 2, "")), 6.0);
        assert_eq!(outer_bonus(&WardrobeItem::new("a", 6, "")), 6.0);
        assert_eq!(outer_bonus(&WardrobeItem::new("a", 8, "")), 0.0);
        assert_eq!(outer_bonus(&WardrobeItem::new("a", 1, "").with_warmth(5)), 14.0);
        assert_eq!(outer_bonus(&WardrobeItem::new("a", 5, "").with_warmth(1)), -4.0);
    }

    #[test]
    fn inner_thresholds() {
        assert_eq!(inner_layer(2.9, 10.0), INNER_HEAVY);
        assert_eq!(inner_layer(3.0, 10.0), INNER_KNIT);
        assert_eq!(inner_layer(8.0, 10.0), INNER_LIGHT_KNIT);
        assert_eq!(inner_layer(15.0, 20.0), INNER_LONG_SLEEVE);
        assert_eq!(inner_layer(22.0, 28.0), INNER_TEE);
        assert_eq!(inner_layer(5.0, 30.0), INNER_SHORT_SLEEVE);
    }

    #[test]
    fn mild_day_gets_default_advice() {
        let item = WardrobeItem::new("a", 4, "Parka");
        let advisory = advise(&item, &env(vec![16.0, 18.0, 19.0], 9, 11));
        assert_eq!(advisory.advice, ADVICE_DEFAULT);
        assert_eq!(advisory.inner, INNER_LONG_SLEEVE);
    }

    #[test]
    fn heat_warning_wins_over_warm_day() {
        let item = WardrobeItem::new("a", 8, "Cardigan");
        let advisory = advise(&item, &env(vec![27.0, 31.0], 12, 13));
        assert!(advisory.advice.starts_with(ADVICE_HEAT));
        assert!(!advisory.advice.contains(ADVICE_WARM));
        assert_eq!(advisory.inner, INNER_SHORT_SLEEVE);
    }

    #[test]
    fn warm_outer_on_mild_day() {
        let item = WardrobeItem::new("a", 6, "Wool coat");
        let advisory = advise(&item, &env(vec![10.0, 14.0], 9, 10));
        assert_eq!(advisory.advice, ADVICE_LIGHT_INNER);
    }

    #[test]
    fn thin_outer_on_cold_day() {
        let item = WardrobeItem::new("a", 5, "Blazer");
        let advisory = advise(&item, &env(vec![1.0, 4.0], 9, 10));
        assert_eq!(advisory.advice, ADVICE_LAYER_UP);
        assert_eq!(advisory.inner, INNER_HEAVY);
    }

    #[test]
    fn sentences_follow_priority_order() {
        let item = WardrobeItem::new("a", 5, "Blazer");
        let env = EnvironmentSnapshot::new(vec![2.0, 14.0], 7, 19, 11)
            .unwrap()
            .with_wind(6.0)
            .with_weather_code(61)
            .with_transport(Transport::Walk);

        let advice = advise(&item, &env).advice;
        let expected = [
            ADVICE_LAYER_UP,
            ADVICE_UMBRELLA,
            ADVICE_WIND,
            ADVICE_SWING,
            ADVICE_NIGHT,
        ]
        .join(" ");
        assert_eq!(advice, expected);
    }

    #[test]
    fn hood_skips_umbrella() {
        let item = WardrobeItem::new("a", 4, "Parka").with_hood(true);
        let env = env(vec![16.0, 18.0], 9, 10).with_weather_code(80);
        assert!(!advise(&item, &env).advice.contains(ADVICE_UMBRELLA));
    }
}
