//! Surface event bridge
//!
//! Passive observer that feeds the surface's lifecycle events back
//! into the session controller. After any event the address display
//! equals the surface's self-reported URL exactly, replacing whatever
//! optimistic value a pending navigation wrote.

use std::sync::Arc;

use crate::controller::SessionController;
use crate::surface::SurfaceEvent;

pub struct SurfaceEventBridge {
    controller: SessionController,
}

impl SurfaceEventBridge {
    /// Subscribe to the controller's surface and route every event
    /// back into it. The subscription outlives the returned bridge;
    /// the bridge handle exists for embedders that also need to inject
    /// events directly.
    pub fn attach(controller: SessionController) -> Self {
        let observer = controller.clone();
        controller
            .surface()
            .subscribe(Arc::new(move |event| observer.sync_from_surface(event)));

        Self { controller }
    }

    /// Feed one lifecycle event through the bridge by hand.
    pub fn handle(&self, event: SurfaceEvent) {
        self.controller.sync_from_surface(event);
    }
}
