use crate::models::upstream::weather_error_message;
use crate::models::{LocationInfo, TemperatureInfo, WeatherApiResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::field::Empty;
use tracing::Span;

/// Errors that can occur when querying the weather provider
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("WeatherAPI error: {0}")]
    Upstream(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// WeatherAPI client
///
/// Queries `current.json` by city name only. The state is left out of the
/// query because `"<city>, <UF>"` lookups fail for a number of Brazilian
/// cities with accented names.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl WeatherClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            client,
        })
    }

    /// Fetch the current temperature for a location
    #[tracing::instrument(
        name = "weather.current_temperature",
        skip(self, location),
        fields(
            query = %location.city,
            state = %location.state,
            http.status_code = Empty,
            city = Empty,
            temp_c = Empty,
            temp_f = Empty,
            temp_k = Empty
        )
    )]
    pub async fn current_temperature(&self, location: &LocationInfo) -> Result<TemperatureInfo, WeatherError> {
        let url = format!("{}/current.json", self.base_url.trim_end_matches('/'));
        let query = location.city.as_str();

        tracing::debug!("Fetching temperature for {} ({}) from {}", query, location.state, url);

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query), ("aqi", "no")])
            .send()
            .await?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());
        let body = response.bytes().await?;

        if !status.is_success() {
            tracing::warn!(
                "WeatherAPI returned status {} for {}: {}",
                status,
                query,
                String::from_utf8_lossy(&body)
            );
            let message = weather_error_message(&body)
                .unwrap_or_else(|| format!("unexpected status {}", status.as_u16()));
            return Err(WeatherError::Upstream(message));
        }

        let parsed: WeatherApiResponse = serde_json::from_slice(&body)
            .map_err(|e| WeatherError::InvalidResponse(format!("Failed to parse WeatherAPI response: {}", e)))?;

        let info = TemperatureInfo::new(parsed.location.name, parsed.current.temp_c, parsed.current.temp_f);

        Span::current()
            .record("city", info.city.as_str())
            .record("temp_c", info.celsius)
            .record("temp_f", info.fahrenheit)
            .record("temp_k", info.kelvin);

        tracing::info!(
            "Temperature for {}: {:.1}°C, {:.1}°F, {:.2}K",
            info.city,
            info.celsius,
            info.fahrenheit,
            info.kelvin
        );

        Ok(info)
    }
}
