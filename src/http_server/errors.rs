//! # API Errors
//!
//! Every failure raised while handling a request ends up here and is
//! rendered as a status code plus `{"message": ...}`.

use std::any::Any;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{BoxError, Json};
use serde::Serialize;
use thiserror::Error;

use crate::employee::ValidationError;
use crate::store::StoreError;

/// Result type for request handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Request handling errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not JSON or does not match the employee shape
    #[error("{0}")]
    Validation(String),

    /// Referenced employee id is not in the store
    #[error("Employee Not Found!")]
    NotFound,

    /// No route matches the request path
    #[error("Not Found")]
    RouteNotFound,

    /// Path exists but not for this method
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Body exceeds the request body limit
    #[error("Payload Too Large")]
    PayloadTooLarge,

    /// The request did not complete within the configured timeout
    #[error("Request Timeout")]
    Timeout,

    // ==================
    // Server Errors (5xx)
    // ==================
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn invalid_body() -> Self {
        ApiError::Validation("Invalid Body".to_string())
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status_code().is_client_error()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err.message)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Internal(err.to_string())
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl From<ApiError> for ErrorResponse {
    fn from(err: ApiError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_client_error() {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        } else {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

/// Router fallback for unmatched paths
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Gives the router's bare 405 responses the uniform error body,
/// keeping the `Allow` header
pub async fn method_not_allowed_as_json(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED {
        return response;
    }

    let allow = response.headers().get(header::ALLOW).cloned();
    let mut rewritten = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = allow {
        rewritten.headers_mut().insert(header::ALLOW, allow);
    }
    rewritten
}

/// Converts middleware failures (timeouts) into API errors
pub async fn handle_middleware_error(err: BoxError) -> ApiError {
    if err.is::<tower::timeout::error::Elapsed>() {
        ApiError::Timeout
    } else {
        ApiError::Internal(err.to_string())
    }
}

/// Renders a panic caught in a handler as a plain 500
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "handler panicked");

    let body = ErrorResponse {
        message: "Internal Server Error".to_string(),
    };
    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::Validation("bad".to_string()).status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::PayloadTooLarge.status_code(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(ApiError::Timeout.status_code(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(ApiError::NotFound.to_string(), "Employee Not Found!");
        assert_eq!(ApiError::invalid_body().to_string(), "Invalid Body");
    }

    #[test]
    fn test_store_error_is_internal() {
        let err = ApiError::from(StoreError::LockPoisoned);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_validation_error_conversion() {
        let err = ApiError::from(ValidationError::new("name is a required field"));
        assert_eq!(err, ApiError::Validation("name is a required field".to_string()));
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse::from(ApiError::NotFound);
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"message":"Employee Not Found!"}"#);
    }

    #[tokio::test]
    async fn test_method_not_allowed_keeps_allow_header() {
        let bare = axum::http::Response::builder()
            .status(StatusCode::METHOD_NOT_ALLOWED)
            .header(header::ALLOW, "GET,PUT,DELETE")
            .body(axum::body::Body::empty())
            .unwrap();

        let response = method_not_allowed_as_json(bare).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET,PUT,DELETE");

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"message":"Method Not Allowed"}"#);
    }

    #[tokio::test]
    async fn test_other_responses_untouched() {
        let ok = axum::http::Response::builder()
            .status(StatusCode::OK)
            .body(axum::body::Body::from("fine"))
            .unwrap();

        let response = method_not_allowed_as_json(ok).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_panic_response_status() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
