//! Well-known configuration file locations

use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "src/config/config.yaml";
pub const DEFAULT_SECRETS_FILE: &str = "src/config/secrets.json";

/// Where the base configuration (YAML) and the secrets store (JSON) live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub secrets_file: PathBuf,
}

impl Default for ConfigPaths {
    fn default() -> Self {
        Self {
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            secrets_file: PathBuf::from(DEFAULT_SECRETS_FILE),
        }
    }
}

impl ConfigPaths {
    pub fn config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = path.into();
        self
    }

    pub fn secrets_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.secrets_file = path.into();
        self
    }

    /// Both default file names placed under `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self { config_file: dir.join("config.yaml"), secrets_file: dir.join("secrets.json") }
    }
}
