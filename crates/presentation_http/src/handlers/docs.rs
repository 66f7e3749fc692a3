//! API documentation handlers

use axum::{Json, response::Html};
use serde_json::Value;

use crate::{error::ApiError, openapi, routes};

/// Serve the OpenAPI description document
pub async fn api_description() -> Result<Json<Value>, ApiError> {
    openapi::api_description()
        .map(Json)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize API description: {e}")))
}

/// Serve the Swagger UI page pointing at the description document
pub async fn swagger_ui() -> Html<String> {
    Html(openapi::swagger_ui_html(&routes::api_path(
        routes::API_DESCRIPTION_ROUTE,
    )))
}
