//! Error types for configuration loading

use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error loading file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// Raised by consumers that refuse to proceed without a credential.
    /// Resolution itself never produces this.
    #[error("Secret '{key}' is not set for provider '{provider}'")]
    MissingSecret { provider: String, key: String },
}

impl ConfigError {
    pub fn parse(path: impl Into<PathBuf>, source: impl Into<BoxError>) -> Self {
        Self::Parse { path: path.into(), source: source.into() }
    }
}
