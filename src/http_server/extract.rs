//! JSON body extraction.
//!
//! Bodies are read as raw bytes and parsed into an untyped value so that
//! shape checking is left to the validator. Any failure to obtain a JSON
//! value (wrong content type, unreadable or malformed body) is reported as
//! `Invalid Body`, except bodies over the size limit, which are 413.

use axum::async_trait;
use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap, StatusCode};
use serde_json::Value;

use super::errors::ApiError;

/// An untyped JSON request body
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::invalid_body());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
                _ => ApiError::invalid_body(),
            })?;

        let value = serde_json::from_slice(&bytes).map_err(|_| ApiError::invalid_body())?;
        Ok(JsonBody(value))
    }
}

/// `application/json` or any `application/*+json` media type
fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(content_type) = content_type.to_str() else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(content_type: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers
    }

    #[test]
    fn test_json_content_types() {
        assert!(has_json_content_type(&headers("application/json")));
        assert!(has_json_content_type(&headers("application/json; charset=utf-8")));
        assert!(has_json_content_type(&headers("Application/JSON")));
        assert!(has_json_content_type(&headers("application/merge-patch+json")));
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!has_json_content_type(&HeaderMap::new()));
        assert!(!has_json_content_type(&headers("text/plain")));
        assert!(!has_json_content_type(&headers("application/x-www-form-urlencoded")));
    }

    #[tokio::test]
    async fn test_malformed_body_rejected() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from("{not json"))
            .unwrap();

        let result = JsonBody::from_request(req, &()).await;
        assert_eq!(result.unwrap_err(), ApiError::invalid_body());
    }

    #[tokio::test]
    async fn test_valid_body_parsed() {
        let req = Request::builder()
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(r#"{"name":"Ada"}"#))
            .unwrap();

        let JsonBody(value) = JsonBody::from_request(req, &()).await.unwrap();
        assert_eq!(value["name"], "Ada");
    }
}
