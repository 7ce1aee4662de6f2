use actix_web::{http::header::ContentType, http::Method, http::StatusCode, web, HttpResponse};
use std::sync::Arc;
use tracing::field::Empty;
use tracing::Span;

use crate::routes::errors::ApiError;
use crate::routes::pipeline::{extract_cep_request, method_not_allowed, preflight};
use crate::services::Forwarder;

/// Gateway state shared across all handlers
#[derive(Clone)]
pub struct GatewayState {
    pub forwarder: Arc<dyn Forwarder>,
}

/// Configure the gateway lookup routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    for path in ["/", "/cep"] {
        cfg.service(
            web::resource(path)
                .route(web::post().to(handle_cep))
                .route(web::method(Method::OPTIONS).to(preflight))
                .default_service(web::to(method_not_allowed)),
        );
    }
}

/// Validate a CEP and relay the temperature backend's answer
///
/// POST /
///
/// Request body:
/// ```json
/// { "cep": "01310100" }
/// ```
#[tracing::instrument(name = "gateway.handle_cep", skip_all, fields(cep = Empty, http.status_code = Empty))]
async fn handle_cep(
    state: web::Data<GatewayState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    let request = extract_cep_request(body)?;
    Span::current().record("cep", request.cep.as_str());

    tracing::info!("Valid CEP received: {}", request.cep);

    let forwarded = state.forwarder.forward(&request).await.map_err(|e| {
        tracing::error!("Failed to reach temperature backend for CEP {}: {}", request.cep, e);
        ApiError::Internal
    })?;

    let status = StatusCode::from_u16(forwarded.status).map_err(|_| {
        tracing::error!("Temperature backend returned invalid status {}", forwarded.status);
        ApiError::Internal
    })?;
    Span::current().record("http.status_code", forwarded.status);

    Ok(HttpResponse::build(status)
        .insert_header(ContentType::json())
        .body(forwarded.body))
}
