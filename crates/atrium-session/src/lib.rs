//! Atrium Browsing Session
//!
//! State machine for the home/browsing view toggle, kept in sync with
//! an embedded browsing surface. The surface is the single source of
//! truth for the current location and navigation capability; the
//! controller is the only component allowed to command navigation.

mod bridge;
mod controller;
mod input;
mod surface;

#[cfg(test)]
pub(crate) mod test_support;

pub use bridge::SurfaceEventBridge;
pub use controller::{NavigationCapability, SessionController, ViewState};
pub use input::{InputDispatcher, InputField};
pub use surface::{BrowsingSurface, SurfaceEvent, SurfaceEventHandler};
