//! Local navigation fallback
//!
//! Deterministic, no-network substitute for the remote resolver. The
//! rule is deliberately dumber than a full URL parser: a query with a
//! dot and no whitespace is a bare address, anything else is a search
//! phrase. Total over every input string.

use url::Url;

use crate::destination::{Provenance, ResolvedDestination};

/// Search engine URL template (`%s` replaced with the encoded query).
pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://www.google.com/search?q=%s";

pub struct FallbackResolver {
    search_template: String,
}

impl FallbackResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Self {
        Self {
            search_template: template,
        }
    }

    pub fn set_search_engine(&mut self, template: String) {
        self.search_template = template;
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Resolve free text into a destination without touching the
    /// network. Pure and total: every input, including the empty
    /// string, yields some URL.
    pub fn resolve(&self, query: &str) -> ResolvedDestination {
        if looks_like_address(query) {
            let url = if has_explicit_scheme(query) {
                query.to_string()
            } else {
                format!("https://{}", query)
            };

            return ResolvedDestination {
                url,
                provenance: Provenance::FallbackLiteral,
            };
        }

        let url = self.search_template.replace("%s", &percent_encode(query));
        ResolvedDestination {
            url,
            provenance: Provenance::FallbackSearch,
        }
    }
}

impl Default for FallbackResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// A dot and no whitespace means "bare host/address".
fn looks_like_address(query: &str) -> bool {
    query.contains('.') && !query.chars().any(char::is_whitespace)
}

/// True when the input already carries a scheme (`https://...`,
/// `file://...`), in which case it is passed through unchanged.
fn has_explicit_scheme(input: &str) -> bool {
    input.contains("://") && Url::parse(input).is_ok()
}

fn percent_encode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}
