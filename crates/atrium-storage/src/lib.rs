//! Atrium Storage Layer
//!
//! SQLite-based persistence for shell preferences. The only durable
//! state the shell keeps is a handful of settings keys (wallpaper
//! selection, search engine template); everything session-related
//! lives and dies with the window.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
