//! Domain typo correction.
//!
//! A [`DomainCorrector`] matches a domain against an ordered
//! [`ReferenceDomains`] list by edit distance and returns the single closest
//! entry.

pub mod corrector;
pub mod reference;

pub use corrector::{DomainCorrector, DomainSuggestion};
pub use reference::{COMMON_DOMAINS, ReferenceDomains};
