use serde::{Deserialize, Serialize};

/// City and state resolved from a postal code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationInfo {
    pub city: String,
    pub state: String,
}

/// Current temperature for a resolved city
///
/// `kelvin` is always derived from `celsius`, never read from upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureInfo {
    pub city: String,
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl TemperatureInfo {
    pub fn new(city: String, celsius: f64, fahrenheit: f64) -> Self {
        Self {
            city,
            celsius,
            fahrenheit,
            kelvin: crate::core::celsius_to_kelvin(celsius),
        }
    }
}
