use serde::{Deserialize, Serialize};

/// Canonical soil categories every raw classifier label normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoilType {
    Loamy,
    Clayey,
    Sandy,
    SandyLoam,
    Alluvial,
    Laterite,
}

/// One normalization rule: the label matches when it contains `needle` and,
/// if set, does not contain `unless`. Rules fire in declaration order.
struct LabelRule {
    needle: &'static str,
    unless: Option<&'static str>,
    soil: SoilType,
}

/// Ordered rule table. "alluvial", "clay" and "laterite" outrank any loam or
/// sandy test, and "sandy loam" must fire before the bare "sandy" rule.
const LABEL_RULES: &[LabelRule] = &[
    LabelRule {
        needle: "alluvial",
        unless: None,
        soil: SoilType::Alluvial,
    },
    LabelRule {
        needle: "clay",
        unless: None,
        soil: SoilType::Clayey,
    },
    LabelRule {
        needle: "laterite",
        unless: None,
        soil: SoilType::Laterite,
    },
    LabelRule {
        needle: "sandy loam",
        unless: None,
        soil: SoilType::SandyLoam,
    },
    LabelRule {
        needle: "sandy",
        unless: Some("loam"),
        soil: SoilType::Sandy,
    },
    LabelRule {
        needle: "loam",
        unless: None,
        soil: SoilType::Loamy,
    },
];

impl SoilType {
    /// Normalize a free-text classifier label to a canonical soil type.
    /// Total: empty or unrecognized input defaults to Loamy.
    pub fn from_label(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return SoilType::Loamy;
        }
        let label = raw.to_lowercase();
        for rule in LABEL_RULES {
            if label.contains(rule.needle)
                && !rule.unless.is_some_and(|excl| label.contains(excl))
            {
                return rule.soil;
            }
        }
        SoilType::Loamy
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SoilType::Loamy => "Loamy Soil",
            SoilType::Clayey => "Clayey Soil",
            SoilType::Sandy => "Sandy Soil",
            SoilType::SandyLoam => "Sandy Loam",
            SoilType::Alluvial => "Alluvial Soil",
            SoilType::Laterite => "Laterite Soil",
        }
    }
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordinal nutrient availability used in soil profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NutrientLevel {
    Low,
    Medium,
    High,
}

impl NutrientLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NutrientLevel::Low => "Low",
            NutrientLevel::Medium => "Medium",
            NutrientLevel::High => "High",
        }
    }
}

impl std::fmt::Display for NutrientLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_unrecognized_default_to_loamy() {
        assert_eq!(SoilType::from_label(""), SoilType::Loamy);
        assert_eq!(SoilType::from_label("   "), SoilType::Loamy);
        assert_eq!(SoilType::from_label("xyz-unrecognized"), SoilType::Loamy);
    }

    #[test]
    fn sandy_loam_never_classified_as_sandy() {
        assert_eq!(SoilType::from_label("sandy loam"), SoilType::SandyLoam);
        assert_eq!(SoilType::from_label("Sandy Loam"), SoilType::SandyLoam);
        assert_eq!(SoilType::from_label("SANDY LOAM soil"), SoilType::SandyLoam);
    }

    #[test]
    fn bare_sandy_matches_sandy() {
        assert_eq!(SoilType::from_label("sandy"), SoilType::Sandy);
        assert_eq!(SoilType::from_label("Sandy Soil"), SoilType::Sandy);
    }

    #[test]
    fn priority_rules_win_over_loam_and_sandy() {
        // "clay" fires before any loam/sandy test
        assert_eq!(SoilType::from_label("sandy clay"), SoilType::Clayey);
        assert_eq!(SoilType::from_label("clay loam"), SoilType::Clayey);
        // "alluvial" outranks "clay"
        assert_eq!(SoilType::from_label("alluvial clay"), SoilType::Alluvial);
        assert_eq!(SoilType::from_label("laterite"), SoilType::Laterite);
    }

    #[test]
    fn plain_loam_matches_loamy() {
        assert_eq!(SoilType::from_label("loam"), SoilType::Loamy);
        assert_eq!(SoilType::from_label("loamy"), SoilType::Loamy);
        assert_eq!(SoilType::from_label("silt loam"), SoilType::Loamy);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(SoilType::from_label("CLAY SOIL"), SoilType::Clayey);
        assert_eq!(SoilType::from_label("LaTeRiTe"), SoilType::Laterite);
    }

    #[test]
    fn display_names_match_registry() {
        assert_eq!(SoilType::Loamy.to_string(), "Loamy Soil");
        assert_eq!(SoilType::SandyLoam.to_string(), "Sandy Loam");
    }
}
