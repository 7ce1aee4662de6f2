use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::models::CepRequest;
use crate::routes::errors::ApiError;

/// Read, parse and validate a postal code request body
///
/// Shared by the gateway and the temperature service so that both reject
/// bad input with the same status codes before any upstream call.
pub fn extract_cep_request(body: Result<web::Bytes, actix_web::Error>) -> Result<CepRequest, ApiError> {
    let body = body.map_err(|e| {
        tracing::info!("Failed to read request body: {}", e);
        ApiError::InvalidBody
    })?;

    let request: CepRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::info!("Failed to parse request JSON: {}", e);
        ApiError::InvalidJson
    })?;

    if request.validate().is_err() {
        tracing::info!("Invalid CEP received: {:?}", request.cep);
        return Err(ApiError::InvalidZipcode);
    }

    Ok(request)
}

/// CORS pre-flight request: success with no body
pub async fn preflight() -> HttpResponse {
    HttpResponse::Ok().finish()
}

/// Any method other than POST or OPTIONS on a lookup route
pub async fn method_not_allowed() -> Result<HttpResponse, ApiError> {
    Err(ApiError::MethodNotAllowed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(raw: &'static str) -> Result<web::Bytes, actix_web::Error> {
        Ok(web::Bytes::from_static(raw.as_bytes()))
    }

    #[test]
    fn test_valid_request() {
        let request = extract_cep_request(body(r#"{"cep":"01310100"}"#)).unwrap();
        assert_eq!(request.cep, "01310100");
    }

    #[test]
    fn test_malformed_json() {
        assert_eq!(extract_cep_request(body("{cep:")).unwrap_err(), ApiError::InvalidJson);
        assert_eq!(extract_cep_request(body("")).unwrap_err(), ApiError::InvalidJson);
        assert_eq!(extract_cep_request(body(r#""01310100""#)).unwrap_err(), ApiError::InvalidJson);
        assert_eq!(extract_cep_request(body(r#"{"cep":1310100}"#)).unwrap_err(), ApiError::InvalidJson);
    }

    #[test]
    fn test_invalid_zipcode() {
        assert_eq!(extract_cep_request(body(r#"{"cep":"123"}"#)).unwrap_err(), ApiError::InvalidZipcode);
        assert_eq!(extract_cep_request(body("{}")).unwrap_err(), ApiError::InvalidZipcode);
    }

    #[test]
    fn test_unreadable_body() {
        let err = actix_web::error::ErrorBadRequest("payload error");
        assert_eq!(extract_cep_request(Err(err)).unwrap_err(), ApiError::InvalidBody);
    }
}
