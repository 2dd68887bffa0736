//! Widget backend client

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::{AuthReading, ChatReply, ExerciseReading, NewsItem, QuickApp, WeatherReport};
use crate::Result;
use crate::WidgetError;

#[derive(Debug, Serialize)]
struct ImagePayload<'a> {
    image: &'a str,
}

#[derive(Debug, Serialize)]
struct MessagePayload<'a> {
    message: &'a str,
}

#[derive(Debug, Serialize)]
struct QueryPayload<'a> {
    query: &'a str,
}

pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// `base_url` is the backend API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn weather(&self) -> Result<WeatherReport> {
        self.get_json("/weather").await
    }

    pub async fn quick_apps(&self) -> Result<Vec<QuickApp>> {
        self.get_json("/apps").await
    }

    pub async fn news(&self) -> Result<Vec<NewsItem>> {
        self.get_json("/news").await
    }

    /// Submit one camera frame (a data URL) for exercise counting.
    pub async fn classify_exercise(&self, frame: &str) -> Result<ExerciseReading> {
        self.post_json("/exercise", &ImagePayload { image: frame })
            .await
    }

    /// Submit one camera frame for face authorization.
    pub async fn face_auth(&self, frame: &str) -> Result<AuthReading> {
        self.post_json("/face_auth", &ImagePayload { image: frame })
            .await
    }

    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        self.post_json("/chat", &MessagePayload { message }).await
    }

    /// Fire-and-forget visit log. The backend only acknowledges.
    pub async fn log_visit(&self, url: &str) -> Result<()> {
        let response = self
            .http
            .post(format!("{}/history", self.base_url))
            .json(&QueryPayload { query: url })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WidgetError::Status(status.as_u16()));
        }
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let response = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(path: &str, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(path = %path, status = %status, "Widget request failed");
            return Err(WidgetError::Status(status.as_u16()));
        }

        // Decode from the raw body so shape errors are serde errors,
        // distinct from transport errors.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
