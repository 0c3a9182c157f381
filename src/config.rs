//! Configuration for building an [`EmailCorrector`](crate::email::EmailCorrector).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::reference::{COMMON_DOMAINS, ReferenceDomains};
use crate::error::{MailfixError, Result};
use crate::util::lines::read_entries_from_file;

/// Corrector configuration, loadable from JSON.
///
/// Missing fields fall back to their defaults, so `{}` is a valid file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Reference domains in lookup order.
    pub domains: Vec<String>,
    /// Batches with at least this many addresses are corrected in parallel.
    pub parallel_threshold: usize,
    /// Log repeated domain entries at `warn` level instead of `debug`.
    /// Repeats are recorded in the reference list either way.
    pub report_duplicates: bool,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            domains: COMMON_DOMAINS.iter().map(|&d| d.to_string()).collect(),
            parallel_threshold: 64,
            report_duplicates: false,
        }
    }
}

impl CorrectorConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: CorrectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Replace the domain list with the contents of a newline-separated file.
    pub fn load_domains_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.domains = read_entries_from_file(path)?;
        self.validate()
    }

    /// Reject domain entries that can never be a valid email domain.
    pub fn validate(&self) -> Result<()> {
        for (i, domain) in self.domains.iter().enumerate() {
            if domain.is_empty() {
                return Err(MailfixError::invalid_config(format!(
                    "domain entry {i} is empty"
                )));
            }
            if domain.contains('@') || domain.chars().any(char::is_whitespace) {
                return Err(MailfixError::invalid_config(format!(
                    "domain entry {i} ({domain:?}) contains '@' or whitespace"
                )));
            }
        }
        Ok(())
    }

    /// Build the reference list described by this configuration.
    pub fn reference_domains(&self) -> ReferenceDomains {
        ReferenceDomains::with_duplicate_reporting(
            self.domains.iter().cloned(),
            self.report_duplicates,
        )
    }
}
