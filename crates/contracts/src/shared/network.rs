//! Best-effort "is this a slow or metered link" heuristic.
//!
//! The browser capability behind it is optional and non-standard, so the
//! reading is modelled as an explicit probe result: either a reading is
//! available or the capability is missing, in which case the hint stays
//! hidden.

use serde::{Deserialize, Serialize};

/// Snapshot of `navigator.connection`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionReading {
    #[serde(default)]
    pub save_data: bool,
    #[serde(default, rename = "type")]
    pub connection_type: Option<String>,
    #[serde(default)]
    pub effective_type: Option<String>,
}

impl ConnectionReading {
    pub fn is_slow(&self) -> bool {
        if self.save_data {
            return true;
        }
        if self
            .connection_type
            .as_deref()
            .is_some_and(|kind| kind.trim().eq_ignore_ascii_case("cellular"))
        {
            return true;
        }
        self.effective_type
            .as_deref()
            .is_some_and(|effective| {
                effective
                    .split_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("2g") || token.eq_ignore_ascii_case("3g"))
            })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NetworkProbe {
    Available(ConnectionReading),
    #[default]
    Unavailable,
}

impl NetworkProbe {
    pub fn is_slow(&self) -> bool {
        match self {
            NetworkProbe::Available(reading) => reading.is_slow(),
            NetworkProbe::Unavailable => false,
        }
    }

    /// Whether the advisory hint should be visible for an item.
    pub fn hint_visible(&self, heavy: bool) -> bool {
        heavy && self.is_slow()
    }
}
