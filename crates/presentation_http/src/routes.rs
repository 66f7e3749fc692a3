//! Route definitions

use std::sync::Arc;

use axum::{Router, extract::DefaultBodyLimit, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    error::ApiError,
    handlers,
    middleware::{AuthGate, BearerAuthLayer, RequestIdLayer},
    state::AppState,
};

/// Prefix every route is mounted under
pub const BASE_PATH: &str = "/api";
/// Greeting endpoints
pub const HELLO_ROUTE: &str = "/hello";
/// OpenAPI description document
pub const API_DESCRIPTION_ROUTE: &str = "/doc";
/// Swagger UI page
pub const SWAGGER_UI_ROUTE: &str = "/docs";

/// Full path of a route under [`BASE_PATH`]
#[must_use]
pub fn api_path(route: &str) -> String {
    format!("{BASE_PATH}{route}")
}

/// Create the main router with all routes and middleware
///
/// Layers, outermost first: request id, tracing, bearer auth, body limit.
/// The documentation routes are the only paths the auth gate lets through
/// without a token; unmatched paths are gated too.
pub fn create_router(state: AppState) -> Router {
    let gate = AuthGate::new(Arc::clone(&state.credential))
        .allow_path(api_path(API_DESCRIPTION_ROUTE))
        .allow_path(api_path(SWAGGER_UI_ROUTE));

    Router::new()
        // Documentation (public)
        .route(&api_path(SWAGGER_UI_ROUTE), get(handlers::docs::swagger_ui))
        .route(
            &api_path(API_DESCRIPTION_ROUTE),
            get(handlers::docs::api_description),
        )
        // Greeting API (bearer token)
        .route(
            &api_path(HELLO_ROUTE),
            get(handlers::hello::get_hello).post(handlers::hello::post_hello),
        )
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.max_body_bytes))
        .layer(BearerAuthLayer::new(gate))
        .layer(TraceLayer::new_for_http())
        .layer(RequestIdLayer::new())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
