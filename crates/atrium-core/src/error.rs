//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] atrium_storage::StorageError),

    #[error("Widget error: {0}")]
    Widget(#[from] atrium_widgets::WidgetError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
