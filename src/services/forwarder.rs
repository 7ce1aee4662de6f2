use crate::models::CepRequest;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::field::Empty;
use tracing::Span;

/// Errors that can occur while handing a request to the temperature backend
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Status and body produced by the temperature backend, relayed verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Boundary between the gateway pipeline and the temperature lookup
///
/// The gateway validates the request, then hands it to a `Forwarder`.
/// Whether the lookup runs in another process or in this one is decided
/// by the implementation.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, request: &CepRequest) -> Result<ForwardedResponse, ForwardError>;
}

/// Proxies requests to a remote temperature service over HTTP
#[derive(Debug, Clone)]
pub struct HttpForwarder {
    base_url: String,
    client: Client,
}

impl HttpForwarder {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ForwardError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/temperature", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    #[tracing::instrument(
        name = "forwarder.http",
        skip(self, request),
        fields(cep = %request.cep, http.status_code = Empty, response.body_size = Empty)
    )]
    async fn forward(&self, request: &CepRequest) -> Result<ForwardedResponse, ForwardError> {
        let url = self.endpoint();

        tracing::info!("Forwarding CEP {} to {}", request.cep, url);

        let response = self.client.post(&url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();

        Span::current()
            .record("http.status_code", status)
            .record("response.body_size", body.len());

        tracing::debug!(
            "Temperature service answered {} ({} bytes) for CEP {}",
            status,
            body.len(),
            request.cep
        );

        Ok(ForwardedResponse { status, body })
    }
}
