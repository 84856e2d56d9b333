use super::soil::{NutrientLevel, SoilType};
use serde::Serialize;

/// One stage of a crop's life cycle, first stage to harvest, strictly
/// linear. Display data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimelineStage {
    pub stage: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

/// A crop candidate declared in a soil profile. Declaration order within a
/// profile is the tie-break order for equal adjusted scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropCandidate {
    pub name: &'static str,
    pub base_suitability: i32,
    pub reason: &'static str,
    pub growth_timeline: &'static [TimelineStage],
}

/// Static attributes of one canonical soil type plus its candidate crops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilProfile {
    pub soil: SoilType,
    pub ph: f64,
    pub nitrogen: NutrientLevel,
    pub phosphorus: NutrientLevel,
    pub potassium: NutrientLevel,
    pub moisture: &'static str,
    pub texture: &'static str,
    pub crops: &'static [CropCandidate],
}

/// A crop candidate after weather adjustment. Request-scoped.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustedCrop {
    pub name: &'static str,
    pub suitability: i32,
    pub reason: &'static str,
    pub growth_timeline: &'static [TimelineStage],
    pub weather_impact: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Nutrients {
    pub nitrogen: NutrientLevel,
    pub phosphorus: NutrientLevel,
    pub potassium: NutrientLevel,
}

/// The full analysis assembled per request. Serializes to the camelCase
/// wire shape the front-end consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub soil_type: &'static str,
    #[serde(rename = "pH")]
    pub ph: f64,
    pub nutrients: Nutrients,
    pub recommended_crops: Vec<AdjustedCrop>,
    pub moisture: &'static str,
    pub texture: &'static str,
    pub weather_adjustment: String,
    pub location_adjustment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_serializes_to_camel_case_wire_shape() {
        let result = AnalysisResult {
            soil_type: "Loamy Soil",
            ph: 6.5,
            nutrients: Nutrients {
                nitrogen: NutrientLevel::Medium,
                phosphorus: NutrientLevel::High,
                potassium: NutrientLevel::Medium,
            },
            recommended_crops: vec![AdjustedCrop {
                name: "Tomatoes",
                suitability: 95,
                reason: "test",
                growth_timeline: &[TimelineStage {
                    stage: "Harvest",
                    duration: "Ongoing",
                    description: "Pick regularly.",
                }],
                weather_impact: "Weather conditions are suitable".to_string(),
            }],
            moisture: "Good",
            texture: "Well-balanced",
            weather_adjustment: String::new(),
            location_adjustment: String::new(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["soilType"], "Loamy Soil");
        assert_eq!(json["pH"], 6.5);
        assert_eq!(json["nutrients"]["nitrogen"], "Medium");
        assert_eq!(json["recommendedCrops"][0]["weatherImpact"],
            "Weather conditions are suitable");
        assert_eq!(json["recommendedCrops"][0]["growthTimeline"][0]["stage"], "Harvest");
        assert_eq!(json["weatherAdjustment"], "");
        assert_eq!(json["locationAdjustment"], "");
    }
}
