use thiserror::Error;

/// Reasons the viewer refuses to wire itself to a page.
///
/// The `Display` text doubles as the one-line diagnostic written into the
/// status node, so keep it short and human readable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No items configured")]
    NoItems,

    #[error("Duplicate item key \"{0}\"")]
    DuplicateKey(String),

    #[error("Viewer not initialized: #{0} not found")]
    MissingElement(String),

    #[error("Invalid viewer config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::InvalidConfig(err.to_string())
    }
}
