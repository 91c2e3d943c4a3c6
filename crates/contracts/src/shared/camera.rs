use serde::{Deserialize, Serialize};

/// Camera-related widget attributes as the page declared them at setup.
///
/// `None` means the attribute was absent and must be removed again on
/// restore, so the widget falls back to its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraSnapshot {
    pub camera_orbit: Option<String>,
    pub field_of_view: Option<String>,
    pub exposure: Option<String>,
    pub auto_rotate: bool,
}

impl CameraSnapshot {
    /// True when the page declared none of the camera attributes, i.e. there
    /// is nothing worth restoring.
    pub fn is_blank(&self) -> bool {
        self.camera_orbit.is_none() && self.field_of_view.is_none() && self.exposure.is_none()
    }
}
