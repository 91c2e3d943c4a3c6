use std::fmt;

use crate::error::ConfigError;

/// Texts written into the status node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Loading,
    Progress(u8),
    Finalizing,
    Loaded,
    Failed,
    Config(ConfigError),
}

impl StatusMessage {
    /// Status for a displayed percentage.
    pub fn for_percent(percent: u8) -> Self {
        if percent >= 100 {
            StatusMessage::Finalizing
        } else {
            StatusMessage::Progress(percent)
        }
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Loading => f.write_str("Loading…"),
            StatusMessage::Progress(percent) => write!(f, "Loading… {}%", percent),
            StatusMessage::Finalizing => f.write_str("Finalizing…"),
            StatusMessage::Loaded => f.write_str("Loaded ✅"),
            StatusMessage::Failed => f.write_str("Error loading model ❌"),
            StatusMessage::Config(err) => write!(f, "{}", err),
        }
    }
}

impl From<ConfigError> for StatusMessage {
    fn from(err: ConfigError) -> Self {
        StatusMessage::Config(err)
    }
}
