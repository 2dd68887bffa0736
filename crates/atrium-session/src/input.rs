//! Input dispatch
//!
//! Binds the two text-entry affordances to the resolution pipeline.
//! Only the Enter key commits; nothing happens per keystroke, and no
//! trimming or validation is applied here beyond what the fallback
//! heuristic does downstream.

use atrium_resolver::ResolverClient;

use crate::controller::SessionController;

/// Which affordance produced the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// The primary search box on the dashboard.
    Search,
    /// The address bar above the browsing surface.
    AddressBar,
}

pub struct InputDispatcher {
    resolver: ResolverClient,
    controller: SessionController,
}

impl InputDispatcher {
    pub fn new(resolver: ResolverClient, controller: SessionController) -> Self {
        Self {
            resolver,
            controller,
        }
    }

    /// Key handler for both entry fields. `key` carries the key name
    /// as reported by the input layer; only `"Enter"` commits.
    pub async fn on_key(&self, field: InputField, key: &str, value: &str) {
        if key != "Enter" {
            return;
        }

        tracing::debug!(field = ?field, "Input committed");
        self.submit(value).await;
    }

    /// Resolve free text and drive the session to the result. Empty
    /// input is a no-op: neither the remote resolver nor the heuristic
    /// is invoked.
    ///
    /// A submission issued while an earlier one is still resolving is
    /// not cancelled; both eventually navigate, and whichever
    /// resolution completes last wins the visible destination.
    pub async fn submit(&self, query: &str) {
        if query.is_empty() {
            return;
        }

        let destination = self.resolver.resolve(query).await;
        self.controller.go_to(&destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::SurfaceEventBridge;
    use crate::controller::ViewState;
    use crate::test_support::MockSurface;
    use atrium_resolver::{FallbackResolver, NullStatusSink, ResolverClient};
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn dispatcher_for(base_url: &str) -> (InputDispatcher, SessionController, Arc<MockSurface>) {
        let surface = Arc::new(MockSurface::new());
        let controller = SessionController::new(surface.clone(), Arc::new(NullStatusSink));
        SurfaceEventBridge::attach(controller.clone());

        let resolver = ResolverClient::new(
            base_url,
            FallbackResolver::new(),
            Arc::new(NullStatusSink),
        );
        let dispatcher = InputDispatcher::new(resolver, controller.clone());
        (dispatcher, controller, surface)
    }

    #[tokio::test]
    async fn only_enter_commits() {
        let (dispatcher, controller, surface) = dispatcher_for("http://127.0.0.1:9/api");

        dispatcher
            .on_key(InputField::Search, "a", "openai.com")
            .await;
        dispatcher
            .on_key(InputField::AddressBar, "Tab", "openai.com")
            .await;

        assert_eq!(controller.view_state(), ViewState::Home);
        assert!(surface.loads().is_empty());

        dispatcher
            .on_key(InputField::Search, "Enter", "openai.com")
            .await;
        assert_eq!(controller.view_state(), ViewState::Browsing);
    }

    #[tokio::test]
    async fn empty_input_is_a_noop() {
        let (dispatcher, controller, surface) = dispatcher_for("http://127.0.0.1:9/api");

        dispatcher.on_key(InputField::AddressBar, "Enter", "").await;

        assert_eq!(controller.view_state(), ViewState::Home);
        assert!(surface.loads().is_empty());
    }

    #[tokio::test]
    async fn unreachable_resolver_still_navigates_via_fallback() {
        let (dispatcher, controller, surface) = dispatcher_for("http://127.0.0.1:9/api");

        dispatcher.submit("openai.com").await;

        assert_eq!(controller.view_state(), ViewState::Browsing);
        assert_eq!(surface.loads(), vec!["https://openai.com"]);
        assert_eq!(controller.address_value(), "https://openai.com");
    }

    /// Resolver stand-in that answers its first connection slowly and
    /// every later one immediately, each with its own URL.
    async fn serve_staggered(first_url: &'static str, second_url: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let mut served = 0usize;
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let delay = if served == 0 {
                    Duration::from_millis(200)
                } else {
                    Duration::ZERO
                };
                let url = if served == 0 { first_url } else { second_url };
                served += 1;

                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;
                    tokio::time::sleep(delay).await;
                    let body = format!(r#"{{"url":"{}"}}"#, url);
                    let response = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });

        format!("http://{}/api", addr)
    }

    /// Two overlapping submissions race; neither is cancelled and the
    /// one whose resolution completes last owns the final destination.
    #[tokio::test]
    async fn later_completion_wins_the_surface() {
        let base = serve_staggered("https://slow.example", "https://fast.example").await;
        let (dispatcher, controller, surface) = dispatcher_for(&base);

        let first = dispatcher.submit("slow query");
        let second = async {
            // Let the first request reach the resolver before racing it
            tokio::time::sleep(Duration::from_millis(50)).await;
            dispatcher.submit("fast query").await;
        };
        tokio::join!(first, second);

        // Both submissions navigated; the slow resolution finished
        // last and owns the display.
        assert_eq!(surface.loads().len(), 2);
        assert_eq!(surface.loads()[0], "https://fast.example");
        assert_eq!(surface.loads()[1], "https://slow.example");
        assert_eq!(controller.address_value(), "https://slow.example");
        assert_eq!(controller.view_state(), ViewState::Browsing);
    }
}
