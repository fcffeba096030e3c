//! HTTP error boundary.
//!
//! Every handler returns `Result<_, ApiError>`; actix renders the error through
//! `ResponseError` as a JSON `{"error": ...}` body.

use crate::store::StoreError;
use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, ResponseError};
use common::responses::ErrorResponse;
use log::{debug, error};
use thiserror::Error;

pub const ORDER_NOT_FOUND: &str = "Order not found";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{}", ORDER_NOT_FOUND)]
    NotFound,
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                debug!("Order {} not found", id);
                ApiError::NotFound
            }
            other => {
                error!("Store failure: {}", other);
                ApiError::Internal(other.to_string())
            }
        }
    }
}

impl From<actix_web::error::BlockingError> for ApiError {
    fn from(err: actix_web::error::BlockingError) -> Self {
        error!("Blocking pool failure: {}", err);
        ApiError::Internal(err.to_string())
    }
}

/// Turns body decoding failures into the same `{"error": ...}` 400 shape the
/// handlers use, instead of actix's plain-text default.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::Deserialize(inner) => inner.to_string(),
        other => other.to_string(),
    };
    ApiError::BadRequest(message).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn not_found_renders_fixed_message() {
        let resp = ApiError::NotFound.error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(parsed, serde_json::json!({"error": ORDER_NOT_FOUND}));
    }

    #[test]
    fn store_errors_map_to_status_codes() {
        assert!(matches!(
            ApiError::from(StoreError::NotFound(4)),
            ApiError::NotFound
        ));
        assert_eq!(
            ApiError::from(StoreError::Poisoned).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
