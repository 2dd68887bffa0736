//! Atrium Query Resolution
//!
//! Turns arbitrary free-text input (a search phrase or a URL fragment)
//! into a navigable destination. The remote resolver service is asked
//! first; any failure fails over once to a deterministic local
//! heuristic, so callers are always handed a concrete URL and never an
//! error.

mod client;
mod destination;
mod error;
mod fallback;
mod status;

pub use client::ResolverClient;
pub use destination::{Provenance, ResolvedDestination};
pub use error::ResolveError;
pub use fallback::{FallbackResolver, DEFAULT_SEARCH_TEMPLATE};
pub use status::{NullStatusSink, StatusPhase, StatusSink, TracingStatusSink};
