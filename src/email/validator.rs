//! Email address shape checks.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{MailfixError, Result};

/// Pattern an address must match before any correction is attempted:
/// a local part, `@`, dot-separated labels and an alphabetic top-level
/// label of at least two characters.
pub const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Check that `email` has the shape `local@domain.tld`.
pub fn validate_format(email: &str) -> Result<()> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(MailfixError::invalid_format(email))
    }
}

/// Whether `email` passes [`validate_format`].
pub fn is_valid_format(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Split an address into local part and domain on its single `@`.
pub fn split_email(email: &str) -> Result<(&str, &str)> {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => Ok((local, domain)),
        _ => Err(MailfixError::invalid_format(email)),
    }
}
