pub mod engine;
pub mod rainfall;
pub mod temperature;

pub use engine::RecommendationEngine;

use crate::models::WeatherSnapshot;

/// A score change produced by a weather rule, with the message shown to the
/// user for that crop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub delta: i32,
    pub message: &'static str,
}

/// Trait for weather adjustment rules. Rules are evaluated independently
/// per crop and their deltas are additive; the engine applies them in the
/// order it holds them so that impact messages concatenate predictably.
pub trait WeatherRule: Send + Sync {
    /// Unique identifier for this rule
    fn id(&self) -> &'static str;

    /// Evaluate the rule for one crop, returning an adjustment if the
    /// weather conditions apply to it
    fn evaluate(&self, crop_name: &str, weather: &WeatherSnapshot) -> Option<Adjustment>;
}
