//! Browser side: web-sys implementations of the viewer ports and the
//! wiring that connects page events to a controller.

pub mod autohide;
pub mod events;
pub mod mount;
pub mod network;
pub mod overlay;
pub mod registry;
pub mod tabs;
pub mod text;
pub mod timers;
pub mod widget;

pub use mount::{document, mount_tabbed_viewer, report};
