//! Cumulative discomfort penalty for a garment over an outing.
//!
//! Each hour of the window is compared against the garment's comfort band
//! after both have been adjusted: the band by the garment's own attributes,
//! the temperature by wind, humidity, sunshine, exertion, sensitivity and
//! season. Being underdressed costs more than being overdressed, and both
//! grow quadratically with the gap. Situational rules are then applied once.

use super::calculations::effective_temperature;
use super::rules::RulesEngine;
use crate::models::{
    ComfortProfile, EnvironmentSnapshot, GarmentCategory, Thickness, WardrobeItem, WearLog,
    NEUTRAL_WARMTH,
};

/// Band shift (°C) per warmth step away from neutral
pub const WARMTH_MIN_SHIFT: f64 = 3.0;
pub const WARMTH_MAX_SHIFT: f64 = 1.5;
pub const THICK_MIN_SHIFT: f64 = -3.0;
pub const THICK_MAX_SHIFT: f64 = -1.0;
pub const THIN_MIN_SHIFT: f64 = 3.0;
pub const THIN_MAX_SHIFT: f64 = 2.0;

pub const COLD_PENALTY_WEIGHT: f64 = 3.0;
pub const HEAT_PENALTY_WEIGHT: f64 = 2.0;
/// Raw temperature above which heavy categories are ruled out
pub const HEAT_DISQUALIFY_TEMP: f64 = 30.0;
pub const HEAT_DISQUALIFY_PENALTY: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortBand {
    pub min: f64,
    pub max: f64,
}

impl ComfortBand {
    /// The category band shifted by the garment's warmth, or by its thickness
    /// when no warmth level is recorded
    pub fn for_item(item: &WardrobeItem) -> Self {
        let profile = ComfortProfile::for_category(item.category_id);
        let (min_shift, max_shift) = match item.warmth {
            Some(warmth) => {
                let steps = f64::from(warmth) - f64::from(NEUTRAL_WARMTH);
                (-WARMTH_MIN_SHIFT * steps, -WARMTH_MAX_SHIFT * steps)
            }
            None => match item.thickness {
                Thickness::Thick => (THICK_MIN_SHIFT, THICK_MAX_SHIFT),
                Thickness::Normal => (0.0, 0.0),
                Thickness::Thin => (THIN_MIN_SHIFT, THIN_MAX_SHIFT),
            },
        };

        Self {
            min: profile.comfort_min + min_shift,
            max: profile.comfort_max + max_shift,
        }
    }

    /// Discomfort for one hour at `effective` °C
    pub fn penalty(&self, effective: f64) -> f64 {
        if effective < self.min {
            (self.min - effective).powi(2) * COLD_PENALTY_WEIGHT
        } else if effective > self.max {
            (effective - self.max).powi(2) * HEAT_PENALTY_WEIGHT
        } else {
            0.0
        }
    }
}

pub struct PenaltyScorer {
    rules: RulesEngine,
}

impl PenaltyScorer {
    pub fn new() -> Self {
        Self {
            rules: RulesEngine::new(),
        }
    }

    /// Hour-by-hour comfort penalty, before situational rules
    pub fn comfort_penalty(&self, item: &WardrobeItem, env: &EnvironmentSnapshot) -> f64 {
        let band = ComfortBand::for_item(item);
        let heavy = GarmentCategory::is_heavy(item.category_id);

        env.hourly_temps()
            .iter()
            .map(|&raw| {
                let mut penalty = band.penalty(effective_temperature(raw, env));
                if heavy && raw > HEAT_DISQUALIFY_TEMP {
                    penalty += HEAT_DISQUALIFY_PENALTY;
                }
                penalty
            })
            .sum()
    }

    /// Total penalty for wearing `item` during the outing; lower is better
    pub fn penalty(
        &self,
        item: &WardrobeItem,
        env: &EnvironmentSnapshot,
        history: &[WearLog],
    ) -> f64 {
        let comfort = self.comfort_penalty(item, env);
        let situational = self.rules.evaluate(item, env, history);

        tracing::debug!(
            item = %item.name,
            comfort,
            situational,
            adjustments = ?self.rules.breakdown(item, env, history),
            "Scored garment"
        );

        comfort + situational
    }
}

impl Default for PenaltyScorer {
    fn default() -> Self {
        Self::new()
    }
}
