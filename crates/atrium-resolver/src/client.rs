//! Remote resolver client
//!
//! One outbound request per submission. Any failure — non-success
//! status, missing `url` field, malformed body, transport error —
//! fails over immediately to the local heuristic. There is no retry
//! and no surfaced error: the caller always receives a navigable
//! destination.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::destination::ResolvedDestination;
use crate::error::ResolveError;
use crate::fallback::FallbackResolver;
use crate::status::{StatusPhase, StatusSink};

#[derive(Debug, Serialize)]
struct ResolveRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct ResolveResponse {
    url: Option<String>,
}

pub struct ResolverClient {
    http: reqwest::Client,
    endpoint: String,
    /// Per-request timeout. None means the request waits as long as
    /// the transport allows.
    timeout: Option<Duration>,
    fallback: Arc<RwLock<FallbackResolver>>,
    status: Arc<dyn StatusSink>,
}

impl ResolverClient {
    /// `base_url` is the backend API root, e.g. `http://localhost:5000/api`.
    pub fn new(base_url: &str, fallback: FallbackResolver, status: Arc<dyn StatusSink>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/resolve", base_url.trim_end_matches('/')),
            timeout: None,
            fallback: Arc::new(RwLock::new(fallback)),
            status,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn set_search_engine(&self, template: String) {
        self.fallback.write().set_search_engine(template);
    }

    pub fn search_template(&self) -> String {
        self.fallback.read().search_template().to_string()
    }

    /// Resolve a query to a destination.
    ///
    /// Callers must not invoke this for empty input; an empty query is
    /// a no-op upstream. Never fails: every failure path terminates in
    /// the fallback heuristic.
    pub async fn resolve(&self, query: &str) -> ResolvedDestination {
        self.status.trace(StatusPhase::Submitting, query);

        match self.resolve_remote(query).await {
            Ok(url) => {
                self.status.trace(StatusPhase::Resolved, &url);
                ResolvedDestination::remote(url)
            }
            Err(e) => {
                tracing::debug!(error = %e, query = %query, "Remote resolution failed");
                let destination = self.fallback.read().resolve(query);
                self.status.trace(StatusPhase::FallingBack, &destination.url);
                destination
            }
        }
    }

    async fn resolve_remote(&self, query: &str) -> Result<String, ResolveError> {
        let mut request = self
            .http
            .post(&self.endpoint)
            .json(&ResolveRequest { query });

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ResolveError::Status(status.as_u16()));
        }

        let body: ResolveResponse = response.json().await?;
        body.url.ok_or(ResolveError::MissingUrl)
    }
}

impl Clone for ResolverClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            endpoint: self.endpoint.clone(),
            timeout: self.timeout,
            fallback: Arc::clone(&self.fallback),
            status: Arc::clone(&self.status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::destination::Provenance;
    use parking_lot::Mutex;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    #[derive(Default)]
    struct RecordingSink {
        phases: Mutex<Vec<StatusPhase>>,
    }

    impl StatusSink for RecordingSink {
        fn trace(&self, phase: StatusPhase, _detail: &str) {
            self.phases.lock().push(phase);
        }
    }

    /// Serves one HTTP connection with a fixed body, then stops.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
        });

        format!("http://{}/api", addr)
    }

    fn client_with_sink(base_url: &str) -> (ResolverClient, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let client = ResolverClient::new(base_url, FallbackResolver::new(), sink.clone());
        (client, sink)
    }

    #[tokio::test]
    async fn remote_success_yields_remote_provenance() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"url":"https://example.com"}"#).await;
        let (client, sink) = client_with_sink(&base);

        let dest = client.resolve("example").await;
        assert_eq!(dest.url, "https://example.com");
        assert_eq!(dest.provenance, Provenance::Remote);

        let phases = sink.phases.lock().clone();
        assert_eq!(phases, vec![StatusPhase::Submitting, StatusPhase::Resolved]);
    }

    #[tokio::test]
    async fn non_success_status_falls_back() {
        let base = serve_once("HTTP/1.1 500 Internal Server Error", "{}").await;
        let (client, sink) = client_with_sink(&base);

        let dest = client.resolve("best pizza near me").await;
        assert_eq!(dest.provenance, Provenance::FallbackSearch);
        assert!(dest.url.contains("best%20pizza%20near%20me"));

        let phases = sink.phases.lock().clone();
        assert_eq!(
            phases,
            vec![StatusPhase::Submitting, StatusPhase::FallingBack]
        );
    }

    #[tokio::test]
    async fn missing_url_field_falls_back() {
        let base = serve_once("HTTP/1.1 200 OK", r#"{"result":"nope"}"#).await;
        let (client, _) = client_with_sink(&base);

        let dest = client.resolve("openai.com").await;
        assert_eq!(dest.url, "https://openai.com");
        assert_eq!(dest.provenance, Provenance::FallbackLiteral);
    }

    #[tokio::test]
    async fn unreachable_resolver_falls_back() {
        // Nothing listens on the reserved port
        let (client, sink) = client_with_sink("http://127.0.0.1:9/api");

        let dest = client.resolve("openai.com").await;
        assert_eq!(dest.url, "https://openai.com");
        assert_eq!(dest.provenance, Provenance::FallbackLiteral);

        let phases = sink.phases.lock().clone();
        assert_eq!(
            phases,
            vec![StatusPhase::Submitting, StatusPhase::FallingBack]
        );
    }
}
