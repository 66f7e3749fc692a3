//! HTTP middleware components
//!
//! This module contains middleware for authentication, request
//! correlation and request body validation.

pub mod auth;
pub mod request_id;
pub mod validation;

pub use auth::{AuthDecision, AuthGate, BearerAuth, BearerAuthLayer, DenyReason, parse_bearer};
pub use request_id::{REQUEST_ID_HEADER, RequestId, RequestIdLayer, RequestIdService};
pub use validation::ValidatedJson;
