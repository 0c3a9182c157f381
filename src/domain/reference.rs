//! Reference list of known email provider domains.

use std::io::BufRead;
use std::path::Path;

use ahash::AHashSet;
use log::{debug, warn};

use crate::error::Result;
use crate::util::lines::{read_entries, read_entries_from_file};

/// Common email provider domains, in lookup priority order.
pub const COMMON_DOMAINS: &[&str] = &[
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "icloud.com",
    "aol.com",
    "gmx.com",
    "zoho.com",
    "mail.com",
    "yandex.com",
    "protonmail.com",
    "fastmail.com",
    "tutanota.com",
    "lycos.com",
    "inbox.lv",
    "rediffmail.com",
    "qq.com",
    "163.com",
    "mail.ru",
    "seznam.cz",
    "tiscali.it",
    "bol.com.br",
    "o2.co.uk",
    "cox.net",
    "bell.net",
    "sbcglobal.net",
    "telstra.com.au",
    "optusnet.com.au",
    "libero.it",
    "wanadoo.fr",
    "nordnet.fr",
    "mailfence.com",
    "hushmail.com",
    "zohomail.com",
    "gmx.de",
    "fastmail.com",
    "tutanota.com",
    "hushmail.com",
    "yahoo.co.uk",
    "yahoo.fr",
    "hotmail.co.uk",
    "outlook.co.uk",
    "me.com",
    "live.com",
    "frontier.com",
    "t-online.de",
    "blueyonder.co.uk",
    "talktalk.net",
    "comcast.net",
    "virginmedia.com",
    "freenet.de",
    "ntlworld.com",
    "skynet.be",
];

/// An immutable, ordered list of reference domains.
///
/// Order matters: when two entries are equally close to an input, the
/// earlier one wins. Repeated entries are kept (a later copy can never win)
/// and reported through [`ReferenceDomains::duplicates`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceDomains {
    domains: Vec<String>,
    duplicates: Vec<String>,
}

impl ReferenceDomains {
    /// Build a reference list from the given domains, preserving order.
    /// Repeated entries are logged at `warn` level.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_duplicate_reporting(domains, true)
    }

    /// Build a reference list, logging repeated entries at `warn` level when
    /// `report` is set and at `debug` level otherwise. Duplicates are
    /// recorded either way.
    pub fn with_duplicate_reporting<I, S>(domains: I, report: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domains: Vec<String> = domains.into_iter().map(Into::into).collect();

        let mut seen = AHashSet::with_capacity(domains.len());
        let mut duplicates = Vec::new();
        for domain in &domains {
            if !seen.insert(domain.as_str()) {
                if report {
                    warn!("duplicate reference domain {domain:?} will never be suggested");
                } else {
                    debug!("duplicate reference domain {domain:?}");
                }
                duplicates.push(domain.clone());
            }
        }

        debug!("built reference list with {} domains", domains.len());
        ReferenceDomains {
            domains,
            duplicates,
        }
    }

    /// The built-in list of common providers. Its known repeats are logged
    /// at `debug` level only.
    pub fn common() -> Self {
        Self::with_duplicate_reporting(COMMON_DOMAINS.iter().copied(), false)
    }

    /// Read one domain per line. Blank lines and lines starting with `#`
    /// are skipped; surrounding whitespace is trimmed.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Ok(Self::new(read_entries(reader)?))
    }

    /// Read a domain list file (see [`ReferenceDomains::from_reader`]).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(read_entries_from_file(path)?))
    }

    /// Iterate over the domains in lookup order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// The domains in lookup order.
    pub fn as_slice(&self) -> &[String] {
        &self.domains
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// Check whether `domain` is byte-identical to some entry.
    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    /// Entries that repeat an earlier entry, in the order they appear.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }
}

impl Default for ReferenceDomains {
    fn default() -> Self {
        Self::common()
    }
}

impl<S: Into<String>> FromIterator<S> for ReferenceDomains {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
