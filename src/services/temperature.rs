use crate::models::TemperatureInfo;
use crate::services::viacep::{ViaCepClient, ViaCepError};
use crate::services::weather::{WeatherClient, WeatherError};
use thiserror::Error;
use tracing::field::Empty;
use tracing::Span;

/// Client-facing outcome of a failed resolution
///
/// Every failure other than an unknown postal code collapses into
/// `Internal`; the source error is kept for logging only.
#[derive(Debug, Error)]
pub enum TemperatureError {
    #[error("can not find zipcode")]
    NotFound,

    #[error("location lookup failed: {0}")]
    Location(#[source] ViaCepError),

    #[error("weather lookup failed: {0}")]
    Weather(#[from] WeatherError),
}

impl TemperatureError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, TemperatureError::NotFound)
    }
}

impl From<ViaCepError> for TemperatureError {
    fn from(err: ViaCepError) -> Self {
        if err.is_not_found() {
            TemperatureError::NotFound
        } else {
            TemperatureError::Location(err)
        }
    }
}

/// Resolves a postal code to the current temperature of its city
///
/// # Pipeline
/// 1. Directory lookup (ViaCEP)
/// 2. Weather lookup (WeatherAPI) for the resolved city
///
/// Each step is attempted once and the first failure ends the resolution.
#[derive(Debug, Clone)]
pub struct TemperatureService {
    viacep: ViaCepClient,
    weather: WeatherClient,
}

impl TemperatureService {
    pub fn new(viacep: ViaCepClient, weather: WeatherClient) -> Self {
        Self { viacep, weather }
    }

    #[tracing::instrument(
        name = "temperature.resolve",
        skip(self),
        fields(cep = %cep, city = Empty, temp_c = Empty)
    )]
    pub async fn resolve(&self, cep: &str) -> Result<TemperatureInfo, TemperatureError> {
        let location = self.viacep.lookup(cep).await?;
        let temperature = self.weather.current_temperature(&location).await?;

        Span::current()
            .record("city", temperature.city.as_str())
            .record("temp_c", temperature.celsius);

        Ok(temperature)
    }
}
