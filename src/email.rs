//! Email address pipeline: shape validation, splitting and domain correction.

pub mod pipeline;
pub mod validator;

pub use pipeline::{EmailCorrection, EmailCorrector, correct_email};
pub use validator::{EMAIL_PATTERN, is_valid_format, split_email, validate_format};
