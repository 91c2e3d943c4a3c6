//! DOM-free core of the viewer: the controller, its load cycle and the
//! ports it drives.

pub mod autohide;
pub mod controller;
pub mod load_cycle;
pub mod ports;

#[cfg(test)]
pub mod fakes;

pub use autohide::OverlayAutoHide;
pub use controller::{ControllerOptions, ViewerController, LOAD_FALLBACK_DELAY, OVERLAY_COLLAPSE_DELAY};
pub use load_cycle::LoadPhase;
pub use ports::ViewerHandles;
