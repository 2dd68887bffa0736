//! Atrium Dashboard Widgets
//!
//! Typed clients for the widget backend: weather, quick-launch apps,
//! news, exercise classification, face auth, chat, and the visit log.
//! Every call is a one-shot request/response with no retry or backoff;
//! failures come back as typed errors for the dashboard glue to render
//! however it likes. The stock ticker is a local mock and the
//! wallpaper selection is a persisted settings key.

mod client;
mod error;
mod stocks;
mod types;
mod wallpaper;

pub use client::BackendClient;
pub use error::WidgetError;
pub use stocks::mock_ticker;
pub use types::{
    AuthReading, ChatReply, ExerciseReading, NewsItem, QuickApp, StockQuote, WeatherReport,
};
pub use wallpaper::WallpaperStore;

pub type Result<T> = std::result::Result<T, WidgetError>;
