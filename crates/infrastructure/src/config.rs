//! Application configuration

use std::{fmt, path::Path};

use config::{ConfigError, Environment, File};
use domain::{Credential, DomainError};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides (e.g. `HELLO_GATEWAY_SERVER__PORT=8080`)
pub const ENV_PREFIX: &str = "HELLO_GATEWAY";

/// Bearer token accepted when none is configured
pub const DEFAULT_BEARER_TOKEN: &str = "honoiscool";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Security configuration
    #[serde(default)]
    pub security: SecurityConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to
    #[serde(default = "default_port")]
    pub port: u16,

    /// Graceful shutdown timeout in seconds
    #[serde(default = "default_shutdown_timeout")]
    pub shutdown_timeout_secs: u64,

    /// Log format: "json" for structured JSON logs, "text" for human-readable
    #[serde(default)]
    pub log_format: LogFormat,

    /// Maximum body size for JSON requests in bytes (default: 1MB)
    #[serde(default = "default_max_body_json")]
    pub max_body_size_json_bytes: usize,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

const fn default_port() -> u16 {
    3000
}

const fn default_shutdown_timeout() -> u64 {
    30
}

const fn default_max_body_json() -> usize {
    1024 * 1024 // 1MB
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            shutdown_timeout_secs: default_shutdown_timeout(),
            log_format: LogFormat::default(),
            max_body_size_json_bytes: default_max_body_json(),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds to, as `host:port`
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Security configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Static bearer token protecting every non-documentation route
    #[serde(default = "default_bearer_token", skip_serializing)]
    pub bearer_token: SecretString,
}

fn default_bearer_token() -> SecretString {
    SecretString::from(DEFAULT_BEARER_TOKEN)
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            bearer_token: default_bearer_token(),
        }
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

impl SecurityConfig {
    /// Whether the well-known default token is still in use
    #[must_use]
    pub fn uses_default_token(&self) -> bool {
        self.bearer_token.expose_secret() == DEFAULT_BEARER_TOKEN
    }
}

impl AppConfig {
    /// Load configuration from environment and optional `config.*` file
    /// in the working directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::build(
            File::with_name("config").required(false),
            env_source(),
        )
    }

    /// Load configuration from a specific file, still honoring environment overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::build(File::from(path.as_ref()), env_source())
    }

    fn build<F>(file: F, env: Environment) -> Result<Self, ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?;
        config.try_deserialize()
    }

    /// Build the credential that guards the API
    pub fn credential(&self) -> Result<Credential, DomainError> {
        Credential::from_secret(&self.security.bearer_token)
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
