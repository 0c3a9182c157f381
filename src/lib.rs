//! # mailfix
//!
//! Email address validation with domain typo correction.
//!
//! A mistyped provider domain (`gmial.com`, `yaho.com`) is replaced by the
//! closest entry of a reference list, measured by Levenshtein edit distance.
//!
//! ## Features
//!
//! - Byte-wise Levenshtein distance with an early-exit variant
//! - Injectable, ordered reference domain lists (built-in list of common providers)
//! - Syntax validation and `local@domain` reassembly
//! - Parallel batch correction
//!
//! ```
//! use mailfix::prelude::*;
//!
//! assert_eq!(correct_email("user@gmial.com").unwrap(), "user@gmail.com");
//! assert!(correct_email("user@").unwrap_err().is_invalid_format());
//!
//! let corrector = DomainCorrector::new(ReferenceDomains::new(["corp.example"]));
//! assert_eq!(corrector.suggest("crop.example"), "corp.example");
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod email;
pub mod error;
pub mod util;

pub mod prelude {
    pub use crate::config::CorrectorConfig;
    pub use crate::domain::{DomainCorrector, DomainSuggestion, ReferenceDomains};
    pub use crate::email::{EmailCorrection, EmailCorrector, correct_email, validate_format};
    pub use crate::error::{MailfixError, Result};
    pub use crate::util::levenshtein::levenshtein_distance;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
