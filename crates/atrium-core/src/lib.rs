//! Atrium Core
//!
//! Central coordination layer for the Atrium dashboard shell. Wires
//! the settings store, the query resolver, the browsing session, and
//! the widget clients into one `Shell` handle for the embedding layer.

mod config;
mod error;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use shell::Shell;

// Re-export the pieces embedders interact with directly
pub use atrium_resolver::{
    FallbackResolver, Provenance, ResolvedDestination, ResolverClient, StatusPhase, StatusSink,
    TracingStatusSink,
};
pub use atrium_session::{
    BrowsingSurface, InputDispatcher, InputField, NavigationCapability, SessionController,
    SurfaceEvent, SurfaceEventBridge, ViewState,
};
pub use atrium_storage::{Database, StorageError};
pub use atrium_widgets::{
    mock_ticker, AuthReading, BackendClient, ChatReply, ExerciseReading, NewsItem, QuickApp,
    StockQuote, WallpaperStore, WeatherReport, WidgetError,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
