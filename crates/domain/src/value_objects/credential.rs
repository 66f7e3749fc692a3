//! Bearer credential guarding the API
//!
//! The gateway authenticates every protected request against a single
//! server-held token. The token is fixed when the process starts and is
//! never mutated afterwards; callers share it behind an `Arc`.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

use crate::DomainError;

/// Server-held bearer token
///
/// Comparison against presented tokens runs in constant time with respect
/// to the token content. The secret never appears in `Debug` output.
pub struct Credential(SecretString);

impl Credential {
    /// Create a credential from a raw token
    ///
    /// The token must be non-empty and use the RFC 6750 `token68` alphabet,
    /// otherwise no `Authorization: Bearer` header could ever carry it.
    pub fn new(token: impl Into<String>) -> Result<Self, DomainError> {
        let token = token.into();

        if token.trim().is_empty() {
            return Err(DomainError::invalid_credential("bearer token must not be empty"));
        }

        if !is_token68(&token) {
            return Err(DomainError::invalid_credential(
                "bearer token contains characters not allowed in an Authorization header",
            ));
        }

        Ok(Self(SecretString::from(token)))
    }

    /// Create a credential from an already wrapped secret
    pub fn from_secret(secret: &SecretString) -> Result<Self, DomainError> {
        Self::new(secret.expose_secret())
    }

    /// Check whether a presented token is exactly this credential
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.0
            .expose_secret()
            .as_bytes()
            .ct_eq(candidate.as_bytes())
            .into()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"[REDACTED]").finish()
    }
}

/// Check a string against the `token68` grammar: `[A-Za-z0-9._~+/-]+=*`
#[must_use]
pub fn is_token68(value: &str) -> bool {
    let body = value.trim_end_matches('=');

    !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'~' | b'+' | b'/' | b'-'))
}
