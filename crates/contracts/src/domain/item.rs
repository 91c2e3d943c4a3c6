use serde::{Deserialize, Serialize};

// ============================================================================
// Wire shape
// ============================================================================

/// One item exactly as a page supplies it.
///
/// Every field is optional on the wire; [`Item::from_config`] fills the gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemConfig {
    #[serde(default)]
    pub key: Option<String>,

    /// Button text.
    #[serde(default)]
    pub tab: Option<String>,

    /// Title text shown while the item is active.
    #[serde(default)]
    pub label: Option<String>,

    #[serde(default)]
    pub src: Option<String>,

    #[serde(default)]
    pub heavy: bool,
}

// ============================================================================
// Normalized item
// ============================================================================

/// A selectable model configuration. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub key: String,
    pub tab: String,
    pub label: String,
    pub src: String,
    pub heavy: bool,
}

impl Item {
    pub fn new(key: impl Into<String>, tab: impl Into<String>, src: impl Into<String>) -> Self {
        let tab = tab.into();
        Self {
            key: key.into(),
            label: tab.clone(),
            tab,
            src: src.into(),
            heavy: false,
        }
    }

    pub fn heavy(mut self, heavy: bool) -> Self {
        self.heavy = heavy;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Normalize a raw item at position `index`.
    ///
    /// Returns `None` when the item has no resource locator: there is nothing
    /// to show for it.
    pub fn from_config(config: &ItemConfig, index: usize) -> Option<Self> {
        let src = non_blank(config.src.as_deref())?;
        let key = non_blank(config.key.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| format!("tab{}", index));
        let tab = non_blank(config.tab.as_deref())
            .or_else(|| non_blank(config.label.as_deref()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Item {}", index + 1));
        let label = non_blank(config.label.as_deref())
            .map(str::to_string)
            .unwrap_or_else(|| tab.clone());

        Some(Self {
            key,
            tab,
            label,
            src: src.to_string(),
            heavy: config.heavy,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
