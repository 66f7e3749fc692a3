//! Value Objects - Immutable, identity-less domain primitives

mod credential;
mod greeting;

pub use credential::{Credential, is_token68};
pub use greeting::Greeting;
