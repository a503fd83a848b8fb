//! Configuration loading and secret resolution
//!
//! Loads the base configuration and the secrets store from disk, substitutes
//! placeholder leaves with secrets, and derives the parameter set handed to
//! chat-model client constructors.

pub mod client;
pub mod error;
pub mod loader;
pub mod paths;
pub mod resolver;
pub mod service;

pub use client::{ClientParam, ClientParameterView};
pub use error::{ConfigError, Result};
pub use loader::{load_file, load_json, load_yaml};
pub use paths::ConfigPaths;
pub use resolver::{resolve, ResolvedConfig};
pub use service::{ConfigService, ConfigSource, FileSource};

/// A nested key/value tree, used for both the base configuration and secrets.
pub type ConfigTree = serde_json::Map<String, serde_json::Value>;

/// Leaf value requesting substitution from the secrets store.
pub const PLACEHOLDER: &str = "load_from_secrets";

/// Value written in place of a placeholder whose secret could not be found.
pub const MISSING: &str = "undefined";

/// Top-level key grouping provider credentials and options.
pub const API_KEYS_SECTION: &str = "api_keys";

/// Provider whose subtree feeds the client parameter view by default.
pub const DEFAULT_PROVIDER: &str = "openai";
