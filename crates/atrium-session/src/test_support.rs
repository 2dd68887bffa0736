//! Scripted browsing surface for tests.

use parking_lot::Mutex;

use crate::surface::{BrowsingSurface, SurfaceEvent, SurfaceEventHandler};

#[derive(Default)]
struct Inner {
    history: Vec<String>,
    index: usize,
    loads: Vec<String>,
    back_calls: usize,
    forward_calls: usize,
    reload_calls: usize,
}

/// In-memory surface with an explicit history stack. `load` only
/// records the request; `settle_at` simulates the surface actually
/// committing a location (possibly a redirect target) and firing its
/// lifecycle events.
#[derive(Default)]
pub(crate) struct MockSurface {
    inner: Mutex<Inner>,
    handlers: Mutex<Vec<SurfaceEventHandler>>,
}

impl MockSurface {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn settle_at(&self, url: &str) {
        {
            let mut inner = self.inner.lock();
            let next = inner.index + if inner.history.is_empty() { 0 } else { 1 };
            inner.history.truncate(next);
            inner.history.push(url.to_string());
            inner.index = inner.history.len() - 1;
        }
        self.emit(SurfaceEvent::LoadStarted);
        self.emit(SurfaceEvent::Navigated);
        self.emit(SurfaceEvent::LoadStopped);
    }

    pub(crate) fn loads(&self) -> Vec<String> {
        self.inner.lock().loads.clone()
    }

    pub(crate) fn history_len(&self) -> usize {
        self.inner.lock().history.len()
    }

    pub(crate) fn back_calls(&self) -> usize {
        self.inner.lock().back_calls
    }

    pub(crate) fn forward_calls(&self) -> usize {
        self.inner.lock().forward_calls
    }

    pub(crate) fn reload_calls(&self) -> usize {
        self.inner.lock().reload_calls
    }

    pub(crate) fn emit(&self, event: SurfaceEvent) {
        let handlers: Vec<SurfaceEventHandler> = self.handlers.lock().clone();
        for handler in handlers {
            handler(event);
        }
    }
}

impl BrowsingSurface for MockSurface {
    fn load(&self, url: &str) {
        self.inner.lock().loads.push(url.to_string());
    }

    fn back(&self) {
        {
            let mut inner = self.inner.lock();
            inner.back_calls += 1;
            if inner.index > 0 {
                inner.index -= 1;
            }
        }
        self.emit(SurfaceEvent::Navigated);
    }

    fn forward(&self) {
        {
            let mut inner = self.inner.lock();
            inner.forward_calls += 1;
            if inner.index + 1 < inner.history.len() {
                inner.index += 1;
            }
        }
        self.emit(SurfaceEvent::Navigated);
    }

    fn reload(&self) {
        self.inner.lock().reload_calls += 1;
        self.emit(SurfaceEvent::LoadStarted);
        self.emit(SurfaceEvent::LoadStopped);
    }

    fn can_go_back(&self) -> bool {
        self.inner.lock().index > 0
    }

    fn can_go_forward(&self) -> bool {
        let inner = self.inner.lock();
        inner.index + 1 < inner.history.len()
    }

    fn current_url(&self) -> String {
        let inner = self.inner.lock();
        inner.history.get(inner.index).cloned().unwrap_or_default()
    }

    fn subscribe(&self, handler: SurfaceEventHandler) {
        self.handlers.lock().push(handler);
    }
}
