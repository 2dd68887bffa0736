//! Wire shapes for the widget backend
//!
//! Modeled on the backend's actual payloads; anything that does not
//! deserialize into these is a typed decode failure, never a silent
//! partial read.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub temp: String,
    pub condition: String,
    #[serde(default)]
    pub forecast: Vec<String>,
}

/// Quick-launch tile. Activating one feeds `url` through the normal
/// query submission pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickApp {
    pub name: String,
    pub url: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub symbol: String,
    pub price: f64,
    pub change_percent: f64,
}

/// One classification pass over a camera frame. `stage` is null until
/// the classifier has seen a full movement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseReading {
    pub count: u32,
    pub stage: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthReading {
    pub authorized: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}
