//! Application state shared across the router

use std::sync::Arc;

use domain::{Credential, DomainError};
use infrastructure::AppConfig;

/// Default request body limit (1MB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Shared application state
///
/// Built once at startup; nothing in here changes while serving.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Credential every protected request is checked against
    pub credential: Arc<Credential>,
    /// Maximum accepted request body size in bytes
    pub max_body_bytes: usize,
}

impl AppState {
    /// Create state around a credential with default limits
    #[must_use]
    pub fn new(credential: Credential) -> Self {
        Self {
            credential: Arc::new(credential),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// Build state from the loaded configuration
    pub fn from_config(config: &AppConfig) -> Result<Self, DomainError> {
        Ok(Self::new(config.credential()?).with_max_body_bytes(config.server.max_body_size_json_bytes))
    }

    /// Override the request body limit
    #[must_use]
    pub const fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
