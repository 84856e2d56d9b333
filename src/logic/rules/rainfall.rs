use super::{Adjustment, WeatherRule};
use crate::models::WeatherSnapshot;

/// Root crops prone to rot or splitting when rainfall exceeds 150mm.
const ROOT_CROPS: [&str; 3] = ["Carrots", "Potatoes", "Radishes"];

/// Water-hungry crops that need irrigation when rainfall drops below 60mm.
const WATER_HUNGRY: [&str; 2] = ["Rice", "Cabbage"];

/// Rainfall rule - independent of the temperature rule and additive with
/// it:
/// - above 150mm, root crops: −10
/// - below 60mm, water-hungry crops: −15
pub struct RainfallRule;

impl WeatherRule for RainfallRule {
    fn id(&self) -> &'static str {
        "rainfall"
    }

    fn evaluate(&self, crop_name: &str, weather: &WeatherSnapshot) -> Option<Adjustment> {
        if weather.rainfall > 150.0 && ROOT_CROPS.contains(&crop_name) {
            Some(Adjustment {
                delta: -10,
                message: "High rainfall may cause root issues",
            })
        } else if weather.rainfall < 60.0 && WATER_HUNGRY.contains(&crop_name) {
            Some(Adjustment {
                delta: -15,
                message: "Low rainfall, irrigation recommended",
            })
        } else {
            None
        }
    }
}
