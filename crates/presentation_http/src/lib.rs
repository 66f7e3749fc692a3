//! Hello Gateway HTTP presentation layer
//!
//! This crate provides the HTTP API: the bearer-protected greeting
//! endpoints, the OpenAPI description and the Swagger UI page.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::{ApiError, ErrorResponse};
pub use middleware::{
    AuthDecision, AuthGate, BearerAuthLayer, DenyReason, RequestIdLayer, ValidatedJson,
};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;
