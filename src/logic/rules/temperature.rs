use super::{Adjustment, WeatherRule};
use crate::models::WeatherSnapshot;

/// Crops that lose suitability when the temperature climbs above 25°C.
const WARM_SENSITIVE: [&str; 3] = ["Lettuce", "Broccoli", "Cabbage"];

/// Crops that lose suitability when the temperature falls below 15°C.
const COOL_SENSITIVE: [&str; 3] = ["Tomatoes", "Peppers", "Watermelon"];

/// Temperature rule - a mutually exclusive three-way branch, first match
/// wins:
/// - above 25°C, warm-sensitive crops: −15
/// - below 15°C, cool-sensitive crops: −20
/// - 18–25°C inclusive, any crop: +5
///
/// The boundary operators are deliberate: exactly 25°C is not "too warm"
/// (strict `>`) and falls into the +5 band instead.
pub struct TemperatureRule;

impl WeatherRule for TemperatureRule {
    fn id(&self) -> &'static str {
        "temperature"
    }

    fn evaluate(&self, crop_name: &str, weather: &WeatherSnapshot) -> Option<Adjustment> {
        if weather.temperature > 25.0 && WARM_SENSITIVE.contains(&crop_name) {
            Some(Adjustment {
                delta: -15,
                message: "Current temperature is too warm for optimal growth",
            })
        } else if weather.temperature < 15.0 && COOL_SENSITIVE.contains(&crop_name) {
            Some(Adjustment {
                delta: -20,
                message: "Current temperature is too cool, wait for warmer weather",
            })
        } else if (18.0..=25.0).contains(&weather.temperature) {
            Some(Adjustment {
                delta: 5,
                message: "Perfect temperature range for growing",
            })
        } else {
            None
        }
    }
}
