//! Resolution error types
//!
//! These never cross the public `resolve` boundary; they exist so the
//! failover decision is a typed branch rather than optimistic field
//! access on a dynamic payload.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("Resolver returned status {0}")]
    Status(u16),

    #[error("Resolver response has no url field")]
    MissingUrl,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}
