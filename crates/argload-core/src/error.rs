//! Error types surfaced by argument resolution and configuration loading.

use std::path::PathBuf;

/// Failure to load the resource an argument value points at.
///
/// Every loader failure (missing file, permission denied, undecodable text,
/// HTTP transport error, non-200 status) is reported through this one type.
/// The message always names the offending path or URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ResourceLoadingError {
    message: String,
}

impl ResourceLoadingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Configuration file could not be read or parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
