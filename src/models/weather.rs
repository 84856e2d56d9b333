use super::climate::ClimateZone;
use serde::{Deserialize, Serialize};

/// Point-in-time weather used to adjust crop suitability. One fixed
/// snapshot exists per climate zone; callers may also supply their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub condition: String,
    pub humidity: f64,
    pub rainfall: f64,
    pub season: String,
}

impl WeatherSnapshot {
    /// Synthesize the representative snapshot for a climate zone. The match
    /// is exhaustive over the closed enum, so every zone has an entry.
    pub fn for_zone(zone: ClimateZone) -> Self {
        match zone {
            ClimateZone::Tropical => Self::new(28.0, "Humid", 85.0, 200.0, "Rainy"),
            ClimateZone::Subtropical => Self::new(25.0, "Warm", 70.0, 120.0, "Summer"),
            ClimateZone::Temperate => Self::new(18.0, "Partly Cloudy", 65.0, 100.0, "Spring"),
            ClimateZone::Continental => Self::new(12.0, "Overcast", 70.0, 80.0, "Fall"),
            ClimateZone::Boreal => Self::new(8.0, "Cool", 75.0, 60.0, "Spring"),
        }
    }

    fn new(temperature: f64, condition: &str, humidity: f64, rainfall: f64, season: &str) -> Self {
        Self {
            temperature,
            condition: condition.to_string(),
            humidity,
            rainfall,
            season: season.to_string(),
        }
    }
}

/// Caller-supplied geolocation, resolved once per session on the client
/// side. Read-only once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub climate: ClimateZone,
}

impl Location {
    /// Build a location from coordinates when no reverse geocoding result
    /// is available.
    pub fn from_coordinates(latitude: f64, longitude: f64) -> Self {
        Self {
            city: "Your Location".to_string(),
            country: "Unknown".to_string(),
            latitude,
            longitude,
            climate: ClimateZone::from_latitude(latitude),
        }
    }
}
