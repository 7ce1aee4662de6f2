use crate::models::{LocationInfo, ViaCepResponse};
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::field::Empty;
use tracing::Span;

/// Errors that can occur when resolving a postal code
#[derive(Debug, Error)]
pub enum ViaCepError {
    #[error("zipcode not found: {0}")]
    NotFound(String),

    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("ViaCEP returned status {0}")]
    Status(u16),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

impl ViaCepError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViaCepError::NotFound(_))
    }
}

/// ViaCEP directory client
///
/// Maps a postal code to its city and state with a single
/// `GET {base_url}/{cep}/json/`.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    base_url: String,
    client: Client,
}

impl ViaCepClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ViaCepError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Resolve a postal code to a location
    ///
    /// Returns [`ViaCepError::NotFound`] when ViaCEP flags the code as
    /// unknown or answers without a city.
    #[tracing::instrument(
        name = "viacep.lookup",
        skip(self),
        fields(cep = %cep, http.status_code = Empty, found = Empty, city = Empty, state = Empty)
    )]
    pub async fn lookup(&self, cep: &str) -> Result<LocationInfo, ViaCepError> {
        let url = format!("{}/{}/json/", self.base_url.trim_end_matches('/'), cep);

        tracing::debug!("Looking up CEP {} at {}", cep, url);

        let response = self.client.get(&url).send().await?;
        Span::current().record("http.status_code", response.status().as_u16());

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!("ViaCEP returned status {} for CEP {}", status, cep);
            return Err(ViaCepError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let parsed: ViaCepResponse = serde_json::from_slice(&body)
            .map_err(|e| ViaCepError::InvalidResponse(format!("Failed to parse ViaCEP response: {}", e)))?;

        if parsed.erro {
            Span::current().record("found", false);
            tracing::info!("CEP {} not found in ViaCEP", cep);
            return Err(ViaCepError::NotFound(cep.to_string()));
        }

        if parsed.localidade.is_empty() {
            Span::current().record("found", false);
            tracing::info!("CEP {} returned incomplete location data", cep);
            return Err(ViaCepError::NotFound(cep.to_string()));
        }

        let location = LocationInfo {
            city: parsed.localidade,
            state: parsed.uf,
        };

        Span::current()
            .record("found", true)
            .record("city", location.city.as_str())
            .record("state", location.state.as_str());

        tracing::info!("CEP {} resolved to {}/{}", cep, location.city, location.state);

        Ok(location)
    }
}
