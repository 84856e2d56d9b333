use serde::{Deserialize, Serialize};

/// Coarse climate bucket derived from latitude alone. Used to synthesize a
/// representative weather snapshot when no live weather source is wired in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateZone {
    Tropical,
    Subtropical,
    Temperate,
    Continental,
    Boreal,
}

impl ClimateZone {
    /// Classify a latitude into a zone. Bands are half-open over the
    /// absolute latitude, checked in ascending order; anything at or above
    /// 60° is Boreal. Total for any finite input, north/south symmetric.
    pub fn from_latitude(latitude: f64) -> Self {
        let abs_lat = latitude.abs();
        if abs_lat < 23.5 {
            ClimateZone::Tropical
        } else if abs_lat < 35.0 {
            ClimateZone::Subtropical
        } else if abs_lat < 50.0 {
            ClimateZone::Temperate
        } else if abs_lat < 60.0 {
            ClimateZone::Continental
        } else {
            ClimateZone::Boreal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateZone::Tropical => "Tropical",
            ClimateZone::Subtropical => "Subtropical",
            ClimateZone::Temperate => "Temperate",
            ClimateZone::Continental => "Continental",
            ClimateZone::Boreal => "Boreal",
        }
    }
}

impl std::fmt::Display for ClimateZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
