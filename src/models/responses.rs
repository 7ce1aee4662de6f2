use serde::{Deserialize, Serialize};
use crate::models::domain::TemperatureInfo;

/// Successful temperature lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureResponse {
    pub city: String,
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl From<TemperatureInfo> for TemperatureResponse {
    fn from(info: TemperatureInfo) -> Self {
        Self {
            city: info.city,
            temp_c: info.celsius,
            temp_f: info.fahrenheit,
            temp_k: info.kelvin,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response, the only body shape on failure paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
