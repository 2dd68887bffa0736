//! Embedded browsing surface boundary
//!
//! The session layer depends only on this interface, never on a
//! concrete webview toolkit. The surface navigates independently
//! (redirects, in-page history) and reports its own position; the
//! session layer never reaches into rendered content.

use std::sync::Arc;

/// Lifecycle events emitted by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The surface started loading a document.
    LoadStarted,
    /// The surface finished (or aborted) loading.
    LoadStopped,
    /// The surface committed a navigation to a new document.
    Navigated,
    /// The surface navigated within the current document.
    NavigatedInPage,
}

pub type SurfaceEventHandler = Arc<dyn Fn(SurfaceEvent) + Send + Sync>;

/// Commands and observed state of an embedded browsing surface.
pub trait BrowsingSurface: Send + Sync {
    /// Begin loading `url`. Completion is reported through events.
    fn load(&self, url: &str);

    fn back(&self);
    fn forward(&self);
    fn reload(&self);

    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;

    /// The surface's self-reported current location. May differ from
    /// the last requested URL (redirects, load failures).
    fn current_url(&self) -> String;

    /// Register a handler for lifecycle events.
    fn subscribe(&self, handler: SurfaceEventHandler);
}
