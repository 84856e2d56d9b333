use super::{rainfall::RainfallRule, temperature::TemperatureRule, WeatherRule};
use crate::knowledge;
use crate::models::{AdjustedCrop, AnalysisResult, Location, Nutrients, SoilType, WeatherSnapshot};

/// Suitability scores are clamped to this band regardless of how many
/// penalties stack up; recommendations degrade, they never disappear.
const MIN_SUITABILITY: i32 = 40;
const MAX_SUITABILITY: i32 = 100;

const IMPACT_SEPARATOR: &str = " • ";
const NEUTRAL_IMPACT: &str = "Weather conditions are suitable";

/// Produces a ranked, weather-adjusted crop analysis for a raw soil label.
/// Stateless and total: garbage labels normalize to Loamy, and absent
/// weather or location simply skip their adjustment steps.
pub struct RecommendationEngine {
    rules: Vec<Box<dyn WeatherRule>>,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        // Temperature before rainfall so impact messages concatenate in the
        // order users expect.
        let rules: Vec<Box<dyn WeatherRule>> =
            vec![Box::new(TemperatureRule), Box::new(RainfallRule)];

        Self { rules }
    }

    pub fn recommend(
        &self,
        raw_soil_label: &str,
        weather: Option<&WeatherSnapshot>,
        location: Option<&Location>,
    ) -> AnalysisResult {
        let soil = SoilType::from_label(raw_soil_label);
        let profile = knowledge::lookup(soil);

        let mut crops: Vec<AdjustedCrop> = profile
            .crops
            .iter()
            .map(|crop| self.adjust_crop(crop, weather))
            .collect();

        // Stable sort keeps the profile's declared order on ties.
        crops.sort_by(|a, b| b.suitability.cmp(&a.suitability));

        AnalysisResult {
            soil_type: profile.soil.as_str(),
            ph: profile.ph,
            nutrients: Nutrients {
                nitrogen: profile.nitrogen,
                phosphorus: profile.phosphorus,
                potassium: profile.potassium,
            },
            recommended_crops: crops,
            moisture: profile.moisture,
            texture: profile.texture,
            weather_adjustment: weather.map(weather_narrative).unwrap_or_default(),
            location_adjustment: location.map(location_narrative).unwrap_or_default(),
        }
    }

    fn adjust_crop(
        &self,
        crop: &crate::models::CropCandidate,
        weather: Option<&WeatherSnapshot>,
    ) -> AdjustedCrop {
        let mut suitability = crop.base_suitability;
        let mut messages: Vec<&'static str> = Vec::new();

        if let Some(weather) = weather {
            for rule in &self.rules {
                if let Some(adjustment) = rule.evaluate(crop.name, weather) {
                    suitability += adjustment.delta;
                    messages.push(adjustment.message);
                }
            }
        }

        let weather_impact = if messages.is_empty() {
            NEUTRAL_IMPACT.to_string()
        } else {
            messages.join(IMPACT_SEPARATOR)
        };

        AdjustedCrop {
            name: crop.name,
            suitability: clamp_suitability(suitability),
            reason: crop.reason,
            growth_timeline: crop.growth_timeline,
            weather_impact,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_suitability(value: i32) -> i32 {
    value.clamp(MIN_SUITABILITY, MAX_SUITABILITY)
}

fn weather_narrative(weather: &WeatherSnapshot) -> String {
    format!(
        "Current {} conditions with {}°C temperature and {}% humidity \
         have been factored into recommendations.",
        weather.season.to_lowercase(),
        weather.temperature,
        weather.humidity
    )
}

fn location_narrative(location: &Location) -> String {
    format!(
        "Your {} climate zone in {}, {} influences the crop selection and timing.",
        location.climate.as_str().to_lowercase(),
        location.city,
        location.country
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClimateZone;

    fn weather(temperature: f64, rainfall: f64) -> WeatherSnapshot {
        WeatherSnapshot {
            temperature,
            condition: "Humid".to_string(),
            humidity: 85.0,
            rainfall,
            season: "Rainy".to_string(),
        }
    }

    fn assert_sorted_non_increasing(result: &AnalysisResult) {
        for pair in result.recommended_crops.windows(2) {
            assert!(
                pair[0].suitability >= pair[1].suitability,
                "{} ({}) ranked above {} ({})",
                pair[0].name,
                pair[0].suitability,
                pair[1].name,
                pair[1].suitability
            );
        }
    }

    #[test]
    fn clay_soil_in_hot_wet_weather_keeps_rice_on_top() {
        let engine = RecommendationEngine::new();
        let result = engine.recommend("clay soil", Some(&weather(28.0, 200.0)), None);

        assert_eq!(result.soil_type, "Clayey Soil");
        let rice = &result.recommended_crops[0];
        assert_eq!(rice.name, "Rice");
        // 28°C is outside every temperature branch for Rice and 200mm only
        // penalizes root crops, so the base score stands.
        assert_eq!(rice.suitability, 95);
        assert_sorted_non_increasing(&result);
    }

    #[test]
    fn cold_snap_drops_tomatoes_down_the_loamy_ranking() {
        let engine = RecommendationEngine::new();
        let result = engine.recommend("loamy", Some(&weather(12.0, 200.0)), None);

        assert_eq!(result.soil_type, "Loamy Soil");
        let tomatoes = result
            .recommended_crops
            .iter()
            .find(|c| c.name == "Tomatoes")
            .unwrap();
        assert_eq!(tomatoes.suitability, 75);
        assert!(tomatoes.weather_impact.contains("too cool"));
        // Wheat (90) now outranks Tomatoes (75).
        assert_eq!(result.recommended_crops[0].name, "Wheat");
        assert_sorted_non_increasing(&result);
    }

    #[test]
    fn stacked_penalties_concatenate_messages() {
        let engine = RecommendationEngine::new();
        // Hot and dry: Cabbage is both warm-sensitive (−15) and
        // water-hungry (−15), so 85 drops to 55 with both messages joined.
        let result = engine.recommend("clayey", Some(&weather(30.0, 50.0)), None);

        let cabbage = result
            .recommended_crops
            .iter()
            .find(|c| c.name == "Cabbage")
            .unwrap();
        assert_eq!(cabbage.suitability, 55);
        assert_eq!(
            cabbage.weather_impact,
            "Current temperature is too warm for optimal growth • \
             Low rainfall, irrigation recommended"
        );
    }

    #[test]
    fn clamp_bounds_hold_for_extreme_inputs() {
        assert_eq!(clamp_suitability(15), 40);
        assert_eq!(clamp_suitability(-100), 40);
        assert_eq!(clamp_suitability(40), 40);
        assert_eq!(clamp_suitability(105), 100);
        assert_eq!(clamp_suitability(100), 100);
        assert_eq!(clamp_suitability(72), 72);
    }

    #[test]
    fn mid_band_bonus_caps_at_100() {
        let engine = RecommendationEngine::new();
        // 20°C gives every crop +5; Tomatoes at base 95 must not exceed 100.
        let result = engine.recommend("loamy", Some(&weather(20.0, 100.0)), None);
        let tomatoes = &result.recommended_crops[0];
        assert_eq!(tomatoes.name, "Tomatoes");
        assert_eq!(tomatoes.suitability, 100);
    }

    #[test]
    fn all_scores_stay_in_band_across_registry_and_climates() {
        let engine = RecommendationEngine::new();
        let labels = ["loamy", "clay", "sandy", "sandy loam", "alluvial", "laterite"];
        let zones = [
            ClimateZone::Tropical,
            ClimateZone::Subtropical,
            ClimateZone::Temperate,
            ClimateZone::Continental,
            ClimateZone::Boreal,
        ];

        for label in labels {
            for zone in zones {
                let snapshot = WeatherSnapshot::for_zone(zone);
                let result = engine.recommend(label, Some(&snapshot), None);
                for crop in &result.recommended_crops {
                    assert!(
                        (40..=100).contains(&crop.suitability),
                        "{} scored {} under {:?}",
                        crop.name,
                        crop.suitability,
                        zone
                    );
                }
                assert_sorted_non_increasing(&result);
            }
        }
    }

    #[test]
    fn missing_weather_and_location_degrade_gracefully() {
        let engine = RecommendationEngine::new();
        let result = engine.recommend("", None, None);

        // Empty label normalizes to Loamy; scores stay at base.
        assert_eq!(result.soil_type, "Loamy Soil");
        assert_eq!(result.recommended_crops[0].suitability, 95);
        assert_eq!(result.weather_adjustment, "");
        assert_eq!(result.location_adjustment, "");
        for crop in &result.recommended_crops {
            assert_eq!(crop.weather_impact, NEUTRAL_IMPACT);
        }
    }

    #[test]
    fn narratives_interpolate_weather_and_location() {
        let engine = RecommendationEngine::new();
        let snapshot = weather(28.0, 200.0);
        let location = Location {
            city: "Chennai".to_string(),
            country: "India".to_string(),
            latitude: 13.08,
            longitude: 80.27,
            climate: ClimateZone::Tropical,
        };
        let result = engine.recommend("laterite", Some(&snapshot), Some(&location));

        assert_eq!(
            result.weather_adjustment,
            "Current rainy conditions with 28°C temperature and 85% humidity \
             have been factored into recommendations."
        );
        assert_eq!(
            result.location_adjustment,
            "Your tropical climate zone in Chennai, India influences the \
             crop selection and timing."
        );
    }

    #[test]
    fn identical_inputs_yield_identical_output() {
        let engine = RecommendationEngine::new();
        let snapshot = weather(22.0, 90.0);
        let location = Location::from_coordinates(40.7128, -74.006);

        let first = engine.recommend("sandy loam", Some(&snapshot), Some(&location));
        let second = engine.recommend("sandy loam", Some(&snapshot), Some(&location));

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
