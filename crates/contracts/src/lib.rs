//! Shared data model for the tabbed model viewer.
//!
//! Nothing in this crate touches the DOM: it holds the item catalog, the
//! viewer configuration, the connection heuristic and the status texts, so
//! it can be tested natively and reused by any front end.

pub mod domain;
pub mod error;
pub mod shared;

pub use domain::catalog::Catalog;
pub use domain::item::{Item, ItemConfig};
pub use error::ConfigError;
pub use shared::camera::CameraSnapshot;
pub use shared::config::{ElementIds, ResetMode, ViewerConfig};
pub use shared::network::{ConnectionReading, NetworkProbe};
pub use shared::status::StatusMessage;
