//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Credential cannot be used to authenticate requests
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),
}

impl DomainError {
    /// Create an invalid credential error
    pub fn invalid_credential(reason: impl Into<String>) -> Self {
        Self::InvalidCredential(reason.into())
    }
}
