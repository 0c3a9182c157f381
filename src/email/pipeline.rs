//! Validate, split, correct and reassemble email addresses.

use std::sync::LazyLock;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::CorrectorConfig;
use crate::domain::DomainCorrector;
use crate::email::validator::{split_email, validate_format};
use crate::error::Result;

/// Result of correcting a single address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailCorrection {
    /// The address as supplied.
    pub original: String,
    /// Everything before the `@`.
    pub local_part: String,
    /// The domain as supplied.
    pub domain: String,
    /// The domain chosen by the corrector.
    pub suggested_domain: String,
    /// `local_part@suggested_domain`.
    pub corrected: String,
    /// Edit distance between `domain` and `suggested_domain`.
    pub distance: usize,
}

impl EmailCorrection {
    /// Whether the corrected address differs from the supplied one.
    pub fn is_changed(&self) -> bool {
        self.original != self.corrected
    }
}

/// Email correction pipeline.
///
/// Malformed addresses are rejected with
/// [`MailfixError::InvalidFormat`](crate::error::MailfixError::InvalidFormat)
/// before the domain is looked at; well-formed ones always get a corrected
/// address back.
#[derive(Debug, Clone)]
pub struct EmailCorrector {
    domains: DomainCorrector,
    parallel_threshold: usize,
}

impl EmailCorrector {
    /// Create a pipeline around the given domain corrector.
    pub fn new(domains: DomainCorrector) -> Self {
        EmailCorrector {
            domains,
            parallel_threshold: CorrectorConfig::default().parallel_threshold,
        }
    }

    /// Create a pipeline from configuration.
    pub fn from_config(config: &CorrectorConfig) -> Result<Self> {
        config.validate()?;
        let reference = config.reference_domains();
        info!(
            "email corrector ready with {} reference domains",
            reference.len()
        );

        Ok(EmailCorrector {
            domains: DomainCorrector::new(reference),
            parallel_threshold: config.parallel_threshold,
        })
    }

    /// The underlying domain corrector.
    pub fn domain_corrector(&self) -> &DomainCorrector {
        &self.domains
    }

    /// Return `email` with its domain replaced by the closest known domain.
    pub fn correct(&self, email: &str) -> Result<String> {
        Ok(self.correct_detailed(email)?.corrected)
    }

    /// Like [`EmailCorrector::correct`], keeping the intermediate parts.
    pub fn correct_detailed(&self, email: &str) -> Result<EmailCorrection> {
        validate_format(email)?;
        let (local_part, domain) = split_email(email)?;

        let suggestion = self.domains.suggest_with_distance(domain);
        let corrected = format!("{local_part}@{}", suggestion.suggestion);
        debug!("corrected {email:?} -> {corrected:?}");

        Ok(EmailCorrection {
            original: email.to_string(),
            local_part: local_part.to_string(),
            domain: suggestion.original,
            suggested_domain: suggestion.suggestion,
            corrected,
            distance: suggestion.distance,
        })
    }

    /// Correct many addresses, returning one result per input in input order.
    ///
    /// Batches at or above the configured threshold are spread across the
    /// rayon thread pool.
    pub fn correct_batch<S>(&self, emails: &[S]) -> Vec<Result<EmailCorrection>>
    where
        S: AsRef<str> + Sync,
    {
        if emails.len() >= self.parallel_threshold {
            emails
                .par_iter()
                .map(|email| self.correct_detailed(email.as_ref()))
                .collect()
        } else {
            emails
                .iter()
                .map(|email| self.correct_detailed(email.as_ref()))
                .collect()
        }
    }
}

impl Default for EmailCorrector {
    fn default() -> Self {
        Self::new(DomainCorrector::common())
    }
}

static DEFAULT_CORRECTOR: LazyLock<EmailCorrector> = LazyLock::new(EmailCorrector::default);

/// Correct `email` against the built-in provider list.
pub fn correct_email(email: &str) -> Result<String> {
    DEFAULT_CORRECTOR.correct(email)
}
