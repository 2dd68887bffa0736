//! Browsing session controller
//!
//! Owns the home/browsing view toggle and mediates every navigation
//! request. The address display value it holds is provisional after a
//! `go_to` and becomes authoritative only once the surface reports its
//! actual position through the event bridge.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use atrium_resolver::{ResolvedDestination, StatusPhase, StatusSink};

use crate::surface::{BrowsingSurface, SurfaceEvent};

/// Which of the two mutually exclusive regions is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Dashboard region (widgets) is visible.
    Home,
    /// Embedded browsing region is visible.
    Browsing,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Home => "home",
            ViewState::Browsing => "browsing",
        }
    }
}

impl std::fmt::Display for ViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Back/forward availability, sourced from the surface on every
/// lifecycle event rather than tracked independently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationCapability {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

pub struct SessionController {
    surface: Arc<dyn BrowsingSurface>,
    view: Arc<RwLock<ViewState>>,
    address: Arc<RwLock<String>>,
    capability: Arc<RwLock<NavigationCapability>>,
    status: Arc<dyn StatusSink>,
}

impl SessionController {
    pub fn new(surface: Arc<dyn BrowsingSurface>, status: Arc<dyn StatusSink>) -> Self {
        Self {
            surface,
            view: Arc::new(RwLock::new(ViewState::Home)),
            address: Arc::new(RwLock::new(String::new())),
            capability: Arc::new(RwLock::new(NavigationCapability::default())),
            status,
        }
    }

    pub fn view_state(&self) -> ViewState {
        *self.view.read()
    }

    pub fn address_value(&self) -> String {
        self.address.read().clone()
    }

    pub fn capability(&self) -> NavigationCapability {
        *self.capability.read()
    }

    /// Show the browsing region and load `destination`.
    ///
    /// The address display is set optimistically to the requested URL;
    /// the surface's own report overrides it as soon as a lifecycle
    /// event fires. Idempotent on the view state.
    pub fn go_to(&self, destination: &ResolvedDestination) {
        tracing::debug!(
            url = %destination.url,
            provenance = ?destination.provenance,
            "Navigating session"
        );

        *self.view.write() = ViewState::Browsing;
        self.surface.load(&destination.url);
        *self.address.write() = destination.url.clone();
    }

    /// Show the dashboard region. The surface keeps its content and
    /// navigation history, so returning to browsing resumes where the
    /// user left off.
    pub fn go_home(&self) {
        tracing::debug!("Returning to home view");
        *self.view.write() = ViewState::Home;
    }

    /// History back, a silent no-op when the surface reports no
    /// back entry.
    pub fn back(&self) {
        if self.capability().can_go_back {
            self.surface.back();
        }
    }

    /// History forward, a silent no-op when unavailable.
    pub fn forward(&self) {
        if self.capability().can_go_forward {
            self.surface.forward();
        }
    }

    /// Reload the surface's current document. Only meaningful while
    /// the browsing region is active.
    pub fn reload(&self) {
        if self.view_state() == ViewState::Browsing {
            self.surface.reload();
        }
    }

    pub(crate) fn surface(&self) -> &Arc<dyn BrowsingSurface> {
        &self.surface
    }

    /// Reconcile controller state with the surface's own report.
    /// Called by the event bridge on every lifecycle event; the value
    /// read here always overrides any optimistic address.
    pub(crate) fn sync_from_surface(&self, event: SurfaceEvent) {
        let url = self.surface.current_url();
        *self.address.write() = url.clone();
        *self.capability.write() = NavigationCapability {
            can_go_back: self.surface.can_go_back(),
            can_go_forward: self.surface.can_go_forward(),
        };

        match event {
            SurfaceEvent::LoadStarted => self.status.trace(StatusPhase::Loading, &url),
            SurfaceEvent::LoadStopped => self.status.trace(StatusPhase::Ready, &url),
            SurfaceEvent::Navigated | SurfaceEvent::NavigatedInPage => {}
        }
    }
}

impl Clone for SessionController {
    fn clone(&self) -> Self {
        Self {
            surface: Arc::clone(&self.surface),
            view: Arc::clone(&self.view),
            address: Arc::clone(&self.address),
            capability: Arc::clone(&self.capability),
            status: Arc::clone(&self.status),
        }
    }
}
