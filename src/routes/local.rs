use actix_web::ResponseError;
use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{CepRequest, TemperatureInfo, TemperatureResponse};
use crate::routes::errors::ApiError;
use crate::services::{ForwardError, ForwardedResponse, Forwarder, TemperatureError, TemperatureService};

/// Render an orchestration outcome as the status and body the temperature
/// service would have answered with
pub fn render_resolution(
    result: Result<TemperatureInfo, TemperatureError>,
) -> Result<ForwardedResponse, serde_json::Error> {
    match result {
        Ok(info) => Ok(ForwardedResponse {
            status: 200,
            body: serde_json::to_vec(&TemperatureResponse::from(info))?,
        }),
        Err(err) => {
            let api_error = ApiError::from(err);
            Ok(ForwardedResponse {
                status: api_error.status_code().as_u16(),
                body: serde_json::to_vec(&api_error.to_response())?,
            })
        }
    }
}

/// Runs the temperature lookup in-process
#[derive(Clone)]
pub struct LocalForwarder {
    service: Arc<TemperatureService>,
}

impl LocalForwarder {
    pub fn new(service: Arc<TemperatureService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Forwarder for LocalForwarder {
    #[tracing::instrument(name = "forwarder.local", skip(self, request), fields(cep = %request.cep))]
    async fn forward(&self, request: &CepRequest) -> Result<ForwardedResponse, ForwardError> {
        let result = self.service.resolve(&request.cep).await;
        if let Err(err) = &result {
            tracing::warn!("Temperature lookup for CEP {} failed: {}", request.cep, err);
        }
        Ok(render_resolution(result)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ViaCepError, WeatherError};
    use serde_json::{json, Value};

    fn body_json(response: &ForwardedResponse) -> Value {
        serde_json::from_slice(&response.body).unwrap()
    }

    #[test]
    fn test_render_success() {
        let info = TemperatureInfo::new("Sao Paulo".to_string(), 25.0, 77.0);
        let rendered = render_resolution(Ok(info)).unwrap();

        assert_eq!(rendered.status, 200);
        assert_eq!(
            body_json(&rendered),
            json!({"city": "Sao Paulo", "temp_C": 25.0, "temp_F": 77.0, "temp_K": 298.15})
        );
    }

    #[test]
    fn test_render_not_found() {
        let err = TemperatureError::from(ViaCepError::NotFound("00000000".into()));
        let rendered = render_resolution(Err(err)).unwrap();

        assert_eq!(rendered.status, 404);
        assert_eq!(body_json(&rendered), json!({"message": "can not find zipcode"}));
    }

    #[test]
    fn test_render_hides_upstream_details() {
        let err = TemperatureError::from(WeatherError::Upstream("API key is invalid.".into()));
        let rendered = render_resolution(Err(err)).unwrap();

        assert_eq!(rendered.status, 500);
        assert_eq!(body_json(&rendered), json!({"message": "internal server error"}));
    }
}
