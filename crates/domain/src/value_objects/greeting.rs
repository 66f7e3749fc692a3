//! Greeting texts returned by the hello endpoints

use std::fmt;

const WELCOME: &str = "Hello from Hono!";
const ECHO_PREFIX: &str = "Hello! You sent: ";

/// A greeting message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting(String);

impl Greeting {
    /// The fixed welcome greeting
    #[must_use]
    pub fn welcome() -> Self {
        Self(WELCOME.to_string())
    }

    /// Greeting that echoes the caller's message verbatim
    ///
    /// No trimming or sanitizing happens here; escaping is left to the
    /// serialization format the greeting is written into.
    #[must_use]
    pub fn echo(message: &str) -> Self {
        Self(format!("{ECHO_PREFIX}{message}"))
    }

    /// Borrow the greeting text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the greeting, returning its text
    #[must_use]
    pub fn into_message(self) -> String {
        self.0
    }
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
