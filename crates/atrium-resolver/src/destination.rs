//! Resolved destination type

use serde::{Deserialize, Serialize};

/// Where a destination URL came from.
///
/// Not persisted anywhere; carried only so callers and tests can tell
/// which branch produced the URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Provenance {
    /// The remote resolver service answered.
    Remote,
    /// Local heuristic treated the query as a bare host/address.
    FallbackLiteral,
    /// Local heuristic built a search-engine URL.
    FallbackSearch,
}

/// A navigable absolute URL plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDestination {
    pub url: String,
    pub provenance: Provenance,
}

impl ResolvedDestination {
    pub fn remote(url: String) -> Self {
        Self {
            url,
            provenance: Provenance::Remote,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(
            self.provenance,
            Provenance::FallbackLiteral | Provenance::FallbackSearch
        )
    }
}
