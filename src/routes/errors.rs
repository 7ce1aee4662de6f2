use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::services::TemperatureError;

/// Errors returned to HTTP clients
///
/// Each variant renders as `{"message": "..."}` with its status code.
/// Upstream details never reach the client; they are logged where the
/// failure happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid request body")]
    InvalidBody,

    #[error("invalid json format")]
    InvalidJson,

    #[error("invalid zipcode")]
    InvalidZipcode,

    #[error("can not find zipcode")]
    ZipcodeNotFound,

    #[error("internal server error")]
    Internal,
}

impl ApiError {
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            message: self.to_string(),
        }
    }
}

impl From<TemperatureError> for ApiError {
    fn from(err: TemperatureError) -> Self {
        if err.is_not_found() {
            ApiError::ZipcodeNotFound
        } else {
            ApiError::Internal
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody | ApiError::InvalidJson => StatusCode::BAD_REQUEST,
            ApiError::InvalidZipcode => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::ZipcodeNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.to_response())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ViaCepError, WeatherError};

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MethodNotAllowed.status_code(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::InvalidBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidJson.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidZipcode.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::ZipcodeNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Internal.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::InvalidZipcode.to_response().message, "invalid zipcode");
        assert_eq!(ApiError::ZipcodeNotFound.to_response().message, "can not find zipcode");
        assert_eq!(ApiError::Internal.to_response().message, "internal server error");
        assert_eq!(ApiError::InvalidJson.to_response().message, "invalid json format");
    }

    #[test]
    fn test_orchestration_errors_collapse() {
        let not_found = TemperatureError::from(ViaCepError::NotFound("00000000".into()));
        assert_eq!(ApiError::from(not_found), ApiError::ZipcodeNotFound);

        let location = TemperatureError::from(ViaCepError::Status(500));
        assert_eq!(ApiError::from(location), ApiError::Internal);

        let weather = TemperatureError::from(WeatherError::Upstream("API key is invalid.".into()));
        assert_eq!(ApiError::from(weather), ApiError::Internal);
    }
}
