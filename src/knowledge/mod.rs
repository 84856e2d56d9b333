//! Read-only registry of soil profiles. The data is process-wide constant
//! state; no mutation API exists and no locking is needed.

mod profiles;

pub use profiles::PROFILES;

use crate::models::{SoilProfile, SoilType};

/// Look up the profile for a canonical soil type. Total for every value the
/// normalizer can produce; an absent entry falls back to the first (Loamy)
/// profile.
pub fn lookup(soil: SoilType) -> &'static SoilProfile {
    PROFILES
        .iter()
        .find(|profile| profile.soil == soil)
        .unwrap_or(&PROFILES[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutrientLevel;

    const ALL_TYPES: [SoilType; 6] = [
        SoilType::Loamy,
        SoilType::Clayey,
        SoilType::Sandy,
        SoilType::SandyLoam,
        SoilType::Alluvial,
        SoilType::Laterite,
    ];

    #[test]
    fn lookup_is_total_over_canonical_types() {
        for soil in ALL_TYPES {
            assert_eq!(lookup(soil).soil, soil);
        }
    }

    #[test]
    fn every_profile_has_crops_with_timelines() {
        for profile in &PROFILES {
            assert!(
                !profile.crops.is_empty(),
                "{} has no crops",
                profile.soil
            );
            for crop in profile.crops {
                assert!(
                    !crop.growth_timeline.is_empty(),
                    "{} has no growth timeline",
                    crop.name
                );
                assert!((0..=100).contains(&crop.base_suitability));
            }
        }
    }

    #[test]
    fn registry_covers_each_type_exactly_once() {
        for soil in ALL_TYPES {
            let count = PROFILES.iter().filter(|p| p.soil == soil).count();
            assert_eq!(count, 1, "{} appears {} times", soil, count);
        }
    }

    #[test]
    fn clayey_profile_matches_reference_data() {
        let clayey = lookup(SoilType::Clayey);
        assert_eq!(clayey.ph, 7.2);
        assert_eq!(clayey.nitrogen, NutrientLevel::High);
        assert_eq!(clayey.crops[0].name, "Rice");
        assert_eq!(clayey.crops[0].base_suitability, 95);
    }
}
