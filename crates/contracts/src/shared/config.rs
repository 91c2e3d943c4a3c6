use serde::{Deserialize, Serialize};

use crate::domain::item::ItemConfig;
use crate::error::ConfigError;

pub const DEFAULT_NET_HINT_TEXT: &str = "Tip: Wi-Fi will load large models faster.";

/// What the reset button does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ResetMode {
    /// Restore the camera captured at setup, or re-select the active item
    /// when the page declared no camera attributes.
    #[default]
    Auto,
    /// Restore the captured camera, or fall back to automatic framing.
    RestoreCamera,
    /// Reset the turntable and reload the active item.
    Reselect,
}

/// Ids of the page elements the viewer binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementIds {
    pub widget: String,
    pub tabs: String,
    pub status: String,
    pub rotate_button: String,
    pub reset_button: String,
    pub title: String,
    pub net_hint: String,
    pub overlay: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            widget: "mv".into(),
            tabs: "tabs".into(),
            status: "status".into(),
            rotate_button: "btn-rotate".into(),
            reset_button: "btn-reset".into(),
            title: "mode".into(),
            net_hint: "netHint".into(),
            overlay: "loadingOverlay".into(),
        }
    }
}

/// Everything a page passes to `setupTabbedViewer`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    #[serde(default)]
    pub items: Vec<ItemConfig>,

    #[serde(default)]
    pub elements: ElementIds,

    #[serde(default = "default_net_hint_text")]
    pub net_hint_text: Option<String>,

    #[serde(default = "default_cache_bust")]
    pub cache_bust: bool,

    #[serde(default)]
    pub reset_mode: ResetMode,
}

fn default_net_hint_text() -> Option<String> {
    Some(DEFAULT_NET_HINT_TEXT.to_string())
}

fn default_cache_bust() -> bool {
    true
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            elements: ElementIds::default(),
            net_hint_text: default_net_hint_text(),
            cache_bust: default_cache_bust(),
            reset_mode: ResetMode::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Hint text to show on slow links, `None` when the page disabled it.
    pub fn hint_text(&self) -> Option<&str> {
        self.net_hint_text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }
}
