pub mod engine;
pub mod feedback;
pub mod precipitation;
pub mod transport;
pub mod wind;

pub use engine::RulesEngine;

use crate::models::{EnvironmentSnapshot, WardrobeItem, WearLog};

/// Trait for situational penalty adjustments.
///
/// Each rule looks at one garment once per outing (not per hour) and returns
/// a penalty delta: positive makes the garment less attractive, negative is a
/// bonus.
pub trait PenaltyRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Penalty delta for `item` under `env`
    fn evaluate(&self, item: &WardrobeItem, env: &EnvironmentSnapshot, history: &[WearLog])
        -> f64;
}
