//! Greeting handlers

use axum::Json;
use domain::Greeting;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::ValidatedJson;

/// Greeting request body
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({"message": "foo"}))]
pub struct GreetingRequest {
    /// The message to send
    pub message: String,
}

/// Greeting response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[schema(example = json!({"message": "Hello from Hono!"}))]
pub struct GreetingResponse {
    /// Greeting text
    pub message: String,
}

impl From<Greeting> for GreetingResponse {
    fn from(greeting: Greeting) -> Self {
        Self {
            message: greeting.into_message(),
        }
    }
}

/// Hello endpoint
///
/// Returns a hello message
#[utoipa::path(
    get,
    path = "/api/hello",
    tag = "hello",
    responses(
        (status = 200, description = "Responds with a greeting", body = GreetingResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
#[instrument]
pub async fn get_hello() -> Json<GreetingResponse> {
    Json(Greeting::welcome().into())
}

/// Hello POST endpoint
///
/// Send a message and get a response
#[utoipa::path(
    post,
    path = "/api/hello",
    tag = "hello",
    request_body(
        content = GreetingRequest,
        description = "Message to send",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Returns the message", body = GreetingResponse),
        (status = 400, description = "Body is not valid JSON or does not match the schema", body = crate::error::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorResponse),
        (status = 413, description = "Body exceeds the configured size limit", body = crate::error::ErrorResponse),
        (status = 415, description = "Body is not declared as application/json", body = crate::error::ErrorResponse)
    ),
    security(("bearerAuth" = []))
)]
#[instrument(skip(request), fields(message_len = request.message.len()))]
pub async fn post_hello(
    ValidatedJson(request): ValidatedJson<GreetingRequest>,
) -> Json<GreetingResponse> {
    Json(Greeting::echo(&request.message).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_hello_returns_welcome() {
        let Json(response) = get_hello().await;
        assert_eq!(response.message, "Hello from Hono!");
    }

    #[tokio::test]
    async fn post_hello_echoes_message() {
        let request = GreetingRequest {
            message: "foo".to_string(),
        };
        let Json(response) = post_hello(ValidatedJson(request)).await;
        assert_eq!(response.message, "Hello! You sent: foo");
    }

    #[test]
    fn greeting_response_serialization() {
        let response = GreetingResponse::from(Greeting::echo("<script>"));
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"message":"Hello! You sent: <script>"}"#);
    }

    #[test]
    fn greeting_request_requires_message() {
        assert!(serde_json::from_str::<GreetingRequest>("{}").is_err());
        assert!(serde_json::from_str::<GreetingRequest>(r#"{"message": null}"#).is_err());
        assert!(serde_json::from_str::<GreetingRequest>(r#"{"message": "x"}"#).is_ok());
    }
}
