//! Request validation
//!
//! Provides a `ValidatedJson` extractor that checks request bodies against
//! the same serde types the OpenAPI schemas are derived from, and turns
//! every rejection into an [`ApiError`].

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// A JSON extractor that reports schema violations as structured errors
///
/// | Failure                         | Status |
/// |---------------------------------|--------|
/// | syntax error                    | 400    |
/// | missing field / wrong type      | 400    |
/// | missing `Content-Type`          | 415    |
/// | body over the configured limit  | 413    |
///
/// # Example
///
/// ```ignore
/// #[derive(Deserialize)]
/// struct MyRequest {
///     message: String,
/// }
///
/// async fn handler(ValidatedJson(req): ValidatedJson<MyRequest>) {
///     // req matches the declared schema
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, extract::DefaultBodyLimit, http::StatusCode, routing::post};
    use serde::Deserialize;
    use tower::ServiceExt;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct TestRequest {
        message: String,
    }

    async fn test_handler(ValidatedJson(req): ValidatedJson<TestRequest>) -> String {
        req.message
    }

    fn create_test_app() -> Router {
        Router::new()
            .route("/test", post(test_handler))
            .layer(DefaultBodyLimit::max(64))
    }

    async fn send(body: &'static str, content_type: Option<&str>) -> axum::response::Response {
        let mut builder = axum::http::Request::builder().method("POST").uri("/test");
        if let Some(content_type) = content_type {
            builder = builder.header("content-type", content_type);
        }

        create_test_app()
            .oneshot(builder.body(Body::from(body)).unwrap())
            .await
            .unwrap()
    }

    async fn message_of(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), 4096)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        json["message"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn valid_request_passes() {
        let response = send(r#"{"message": "hello"}"#, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        assert_eq!(&body[..], b"hello");
    }

    #[tokio::test]
    async fn extra_fields_are_ignored() {
        let response = send(
            r#"{"message": "hello", "extra": 1}"#,
            Some("application/json"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn invalid_json_rejected() {
        let response = send(r#"{"message": not valid json}"#, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!message_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn missing_field_rejected_as_bad_request() {
        let response = send(r#"{"other": "x"}"#, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(message_of(response).await.contains("message"));
    }

    #[tokio::test]
    async fn wrong_type_rejected_as_bad_request() {
        let response = send(r#"{"message": 42}"#, Some("application/json")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_rejected() {
        let response = send(r#"{"message": "hello"}"#, None).await;

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }

    #[tokio::test]
    async fn oversized_body_rejected() {
        let response = send(
            r#"{"message": "this body is definitely longer than sixty-four bytes in total"}"#,
            Some("application/json"),
        )
        .await;

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(message_of(response).await, "Payload Too Large");
    }
}
