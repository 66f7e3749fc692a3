//! Bearer token authentication middleware
//!
//! Every request passes through an [`AuthGate`] before routing. The gate
//! returns an explicit [`AuthDecision`]: `Allow` continues dispatch, `Deny`
//! short-circuits with `401 {"message":"Unauthorized"}` so no handler runs.
//!
//! Documentation routes are registered as public paths and skip the check.

use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
    task::{Context, Poll},
};

use axum::{
    extract::Request,
    http::{
        HeaderMap, HeaderValue,
        header::{AUTHORIZATION, WWW_AUTHENTICATE},
    },
    response::{IntoResponse, Response},
};
use domain::{Credential, is_token68};
use tower::{Layer, Service};
use tracing::{debug, warn};

use crate::error::ApiError;

const BEARER_SCHEME: &str = "Bearer";

/// Why a request was turned away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// No `Authorization` header
    MissingHeader,
    /// Header present but not `Bearer <token68>`
    MalformedHeader,
    /// Well-formed bearer token that does not match the credential
    InvalidToken,
}

impl DenyReason {
    /// `WWW-Authenticate` challenge for this reason (RFC 6750 section 3)
    #[must_use]
    pub const fn challenge(self) -> &'static str {
        match self {
            Self::MissingHeader => r#"Bearer realm="api""#,
            Self::MalformedHeader => r#"Bearer error="invalid_request""#,
            Self::InvalidToken => r#"Bearer error="invalid_token""#,
        }
    }

    /// Short name used in logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingHeader => "missing_header",
            Self::MalformedHeader => "malformed_header",
            Self::InvalidToken => "invalid_token",
        }
    }
}

/// Outcome of running a request through the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    /// Forward to the matched handler
    Allow,
    /// Answer 401 and stop
    Deny(DenyReason),
}

/// Decides whether a request may reach the router
#[derive(Debug, Clone)]
pub struct AuthGate {
    credential: Arc<Credential>,
    public_paths: Vec<String>,
}

impl AuthGate {
    /// Create a gate that protects every path
    #[must_use]
    pub fn new(credential: Arc<Credential>) -> Self {
        Self {
            credential,
            public_paths: Vec::new(),
        }
    }

    /// Let an exact path through without credentials
    #[must_use]
    pub fn allow_path(mut self, path: impl Into<String>) -> Self {
        self.public_paths.push(path.into());
        self
    }

    /// Whether the path skips authentication
    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }

    /// Run the check for a request path and its headers
    #[must_use]
    pub fn evaluate(&self, path: &str, headers: &HeaderMap) -> AuthDecision {
        if self.is_public(path) {
            return AuthDecision::Allow;
        }

        let Some(value) = headers.get(AUTHORIZATION) else {
            return AuthDecision::Deny(DenyReason::MissingHeader);
        };

        let Some(token) = value.to_str().ok().and_then(parse_bearer) else {
            return AuthDecision::Deny(DenyReason::MalformedHeader);
        };

        if self.credential.matches(token) {
            AuthDecision::Allow
        } else {
            AuthDecision::Deny(DenyReason::InvalidToken)
        }
    }
}

/// Extract the token from a `Bearer <token>` header value
///
/// The scheme is case-sensitive and followed by one or more spaces;
/// trailing spaces after the token are tolerated.
#[must_use]
pub fn parse_bearer(header: &str) -> Option<&str> {
    let rest = header.strip_prefix(BEARER_SCHEME)?;
    let token = rest.trim_start_matches(' ');

    if token.len() == rest.len() {
        return None;
    }

    let token = token.trim_end_matches(' ');
    is_token68(token).then_some(token)
}

/// Layer that applies bearer token authentication
#[derive(Clone, Debug)]
pub struct BearerAuthLayer {
    gate: Arc<AuthGate>,
}

impl BearerAuthLayer {
    /// Create a layer around a configured gate
    #[must_use]
    pub fn new(gate: AuthGate) -> Self {
        Self {
            gate: Arc::new(gate),
        }
    }
}

impl<S> Layer<S> for BearerAuthLayer {
    type Service = BearerAuth<S>;

    fn layer(&self, inner: S) -> Self::Service {
        BearerAuth {
            inner,
            gate: Arc::clone(&self.gate),
        }
    }
}

/// Middleware service for bearer token authentication
#[derive(Clone, Debug)]
pub struct BearerAuth<S> {
    inner: S,
    gate: Arc<AuthGate>,
}

impl<S> Service<Request> for BearerAuth<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let decision = self.gate.evaluate(req.uri().path(), req.headers());

        match decision {
            AuthDecision::Allow => {
                debug!(path = %req.uri().path(), "Request authorized");
                // Take the service that was driven to readiness
                let clone = self.inner.clone();
                let mut inner = std::mem::replace(&mut self.inner, clone);
                Box::pin(async move { inner.call(req).await })
            },
            AuthDecision::Deny(reason) => {
                warn!(
                    method = %req.method(),
                    path = %req.uri().path(),
                    reason = reason.as_str(),
                    "Rejecting unauthenticated request"
                );
                Box::pin(async move { Ok(unauthorized_response(reason)) })
            },
        }
    }
}

fn unauthorized_response(reason: DenyReason) -> Response {
    let mut response = ApiError::Unauthorized.into_response();
    response
        .headers_mut()
        .insert(WWW_AUTHENTICATE, HeaderValue::from_static(reason.challenge()));
    response
}
