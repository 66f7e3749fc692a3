//! Infrastructure layer - configuration and process-wide plumbing
//!
//! Loads the gateway configuration from files and the environment and
//! sets up structured logging.

pub mod config;
pub mod logging;

pub use config::{AppConfig, LogFormat, SecurityConfig, ServerConfig};
pub use logging::init_logging;
