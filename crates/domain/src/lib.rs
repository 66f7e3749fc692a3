//! Domain layer for Hello Gateway
//!
//! Contains the value objects the gateway reasons about: the bearer
//! credential guarding the API and the greetings it hands back.
//! This layer knows nothing about HTTP.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::*;
