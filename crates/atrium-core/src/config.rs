//! Shell configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use atrium_resolver::DEFAULT_SEARCH_TEMPLATE;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the settings database file
    pub database_path: PathBuf,
    /// Base URL of the local widget/resolver backend
    pub backend_url: String,
    /// Search engine URL template (`%s` replaced with the query)
    pub search_engine: String,
    /// Resolver request timeout in milliseconds. None means no
    /// timeout: a hung resolver stalls that submission until the
    /// transport gives up.
    pub resolver_timeout_ms: Option<u64>,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join("atrium.db"),
            backend_url: "http://localhost:5000/api".to_string(),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            resolver_timeout_ms: None,
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Atrium"))
            .unwrap_or_else(|| PathBuf::from(".atrium"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

// Simple dirs implementation for the data directory
mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
