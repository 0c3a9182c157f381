//! Nearest-neighbour domain correction over a reference list.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::domain::reference::ReferenceDomains;
use crate::util::levenshtein::levenshtein_distance_within;

/// Outcome of a domain lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainSuggestion {
    /// The domain as supplied.
    pub original: String,
    /// The closest reference domain, or `original` when none is closer
    /// than `original.len()` edits.
    pub suggestion: String,
    /// Edit distance between `original` and `suggestion`; equals
    /// `original.len()` when the input was kept.
    pub distance: usize,
}

impl DomainSuggestion {
    /// Whether the suggestion differs from the supplied domain.
    pub fn is_changed(&self) -> bool {
        self.original != self.suggestion
    }
}

/// Suggests the closest known domain for a possibly mistyped one.
///
/// The corrector always answers. Starting from the input itself at a cost of
/// `len(input)`, it walks the reference list in order and takes an entry only
/// when it is strictly closer than the best so far, so the first of several
/// equally close entries wins. An empty input has a starting cost of zero and
/// is returned unchanged, as is any input when the list is empty.
#[derive(Debug, Clone, Default)]
pub struct DomainCorrector {
    reference: ReferenceDomains,
}

impl DomainCorrector {
    /// Create a corrector over the given reference list.
    pub fn new(reference: ReferenceDomains) -> Self {
        DomainCorrector { reference }
    }

    /// Create a corrector over the built-in provider list.
    pub fn common() -> Self {
        Self::new(ReferenceDomains::common())
    }

    /// The reference list this corrector matches against.
    pub fn reference(&self) -> &ReferenceDomains {
        &self.reference
    }

    /// Return the closest reference domain to `domain`.
    pub fn suggest(&self, domain: &str) -> String {
        self.suggest_with_distance(domain).suggestion
    }

    /// Like [`DomainCorrector::suggest`], also reporting the edit distance.
    pub fn suggest_with_distance(&self, domain: &str) -> DomainSuggestion {
        let mut best = domain;
        let mut best_distance = domain.len();

        for candidate in self.reference.iter() {
            if best_distance == 0 {
                break;
            }
            // Only a strictly smaller distance can replace the current best
            if let Some(distance) = levenshtein_distance_within(domain, candidate, best_distance - 1)
            {
                best = candidate;
                best_distance = distance;
            }
        }

        debug!("suggest {domain:?} -> {best:?} (distance {best_distance})");
        DomainSuggestion {
            original: domain.to_string(),
            suggestion: best.to_string(),
            distance: best_distance,
        }
    }
}
