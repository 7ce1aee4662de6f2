use actix_web::{http::Method, web, HttpResponse};
use std::sync::Arc;
use tracing::field::Empty;
use tracing::Span;

use crate::models::TemperatureResponse;
use crate::routes::errors::ApiError;
use crate::routes::pipeline::{extract_cep_request, method_not_allowed, preflight};
use crate::services::TemperatureService;

/// Temperature service state shared across all handlers
#[derive(Clone)]
pub struct TemperatureState {
    pub service: Arc<TemperatureService>,
}

/// Configure the temperature lookup route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/temperature")
            .route(web::post().to(get_temperature))
            .route(web::method(Method::OPTIONS).to(preflight))
            .default_service(web::to(method_not_allowed)),
    );
}

/// Current temperature for a postal code
///
/// POST /temperature
///
/// Responses:
/// - 200 `{"city": "...", "temp_C": 25.0, "temp_F": 77.0, "temp_K": 298.15}`
/// - 404 `{"message": "can not find zipcode"}`
/// - 422 `{"message": "invalid zipcode"}`
/// - 500 `{"message": "internal server error"}`
#[tracing::instrument(
    name = "temperature.handle",
    skip_all,
    fields(cep = Empty, city = Empty, temp_c = Empty, temp_f = Empty, temp_k = Empty)
)]
async fn get_temperature(
    state: web::Data<TemperatureState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let request = extract_cep_request(body)?;
    Span::current().record("cep", request.cep.as_str());

    tracing::info!("Processing CEP: {}", request.cep);

    let info = state.service.resolve(&request.cep).await.map_err(|e| {
        tracing::warn!("Temperature lookup for CEP {} failed: {}", request.cep, e);
        ApiError::from(e)
    })?;

    Span::current()
        .record("city", info.city.as_str())
        .record("temp_c", info.celsius)
        .record("temp_f", info.fahrenheit)
        .record("temp_k", info.kelvin);

    tracing::info!("Answering CEP {}: {} - {:.1}°C", request.cep, info.city, info.celsius);

    Ok(HttpResponse::Ok().json(TemperatureResponse::from(info)))
}
