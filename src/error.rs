//! Error types for mailfix.
//!
//! The distance engine and the domain corrector never fail. Errors come from
//! the email pipeline (malformed addresses) and from the ambient layers
//! around it: configuration loading and the CLI.
//!
//! # Examples
//!
//! ```
//! use mailfix::error::{MailfixError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MailfixError::invalid_format("missing '@'"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for mailfix operations.
#[derive(Error, Debug)]
pub enum MailfixError {
    /// The input does not have the shape `local@domain.tld`, or does not
    /// split into exactly two `@`-delimited parts.
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),

    /// I/O errors (reading config or domain files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with MailfixError.
pub type Result<T> = std::result::Result<T, MailfixError>;

impl MailfixError {
    /// Create a new invalid format error.
    pub fn invalid_format<S: Into<String>>(msg: S) -> Self {
        MailfixError::InvalidFormat(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        MailfixError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        MailfixError::Other(msg.into())
    }

    /// Whether this error reports a malformed address.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, MailfixError::InvalidFormat(_))
    }
}
