use std::path::PathBuf;
use thiserror::Error;

/// Failures while loading a profile for the card. The renderer itself never fails.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON profile: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("invalid TOML profile: {0}")]
    ParseToml(#[from] toml::de::Error),

    #[error("unsupported profile format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
}
