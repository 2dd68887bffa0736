//! Widget error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Backend returned status {0}")]
    Status(u16),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] atrium_storage::StorageError),
}
