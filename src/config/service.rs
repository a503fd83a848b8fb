//! Load-once configuration service
//!
//! [`ConfigService`] is built by the application's composition root and shared
//! by reference (or behind an `Arc`). The first call to any accessor loads both
//! trees, resolves placeholders and derives the client parameters; concurrent
//! first callers block until that finishes and then all observe the same
//! instance. Nothing is reloaded afterwards.

use super::client::ClientParameterView;
use super::error::Result;
use super::loader::{load_json, load_yaml};
use super::paths::ConfigPaths;
use super::resolver::{resolve, ResolvedConfig};
use super::{ConfigTree, DEFAULT_PROVIDER};
use once_cell::sync::OnceCell;

/// Supplies the raw base and secrets trees.
pub trait ConfigSource: Send + Sync {
    fn load_base(&self) -> Result<ConfigTree>;
    fn load_secrets(&self) -> Result<ConfigTree>;
}

/// Reads the base configuration as YAML and the secrets as JSON.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    paths: ConfigPaths,
}

impl FileSource {
    pub fn new(paths: ConfigPaths) -> Self {
        Self { paths }
    }
}

impl ConfigSource for FileSource {
    fn load_base(&self) -> Result<ConfigTree> {
        load_yaml(&self.paths.config_file)
    }

    fn load_secrets(&self) -> Result<ConfigTree> {
        load_json(&self.paths.secrets_file)
    }
}

#[derive(Debug)]
struct Loaded {
    resolved: ResolvedConfig,
    client: ClientParameterView,
}

pub struct ConfigService<S = FileSource> {
    source: S,
    provider: String,
    state: OnceCell<Loaded>,
}

impl ConfigService<FileSource> {
    /// Service reading the fixed default locations.
    pub fn new() -> Self {
        Self::from_paths(ConfigPaths::default())
    }

    pub fn from_paths(paths: ConfigPaths) -> Self {
        Self::with_source(FileSource::new(paths))
    }
}

impl Default for ConfigService<FileSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ConfigSource> ConfigService<S> {
    pub fn with_source(source: S) -> Self {
        Self { source, provider: DEFAULT_PROVIDER.to_string(), state: OnceCell::new() }
    }

    /// Select the `api_keys` entry feeding [`Self::client_params`].
    pub fn provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    pub fn provider_name(&self) -> &str {
        &self.provider
    }

    /// The resolved configuration, loading it on first use.
    ///
    /// Load failures are returned as-is and leave the service uninitialized,
    /// so a later call tries again.
    pub fn full_config(&self) -> Result<&ResolvedConfig> {
        Ok(&self.state()?.resolved)
    }

    /// Client parameters for the selected provider, derived during initialization.
    pub fn client_params(&self) -> Result<&ClientParameterView> {
        Ok(&self.state()?.client)
    }

    pub fn is_initialized(&self) -> bool {
        self.state.get().is_some()
    }

    fn state(&self) -> Result<&Loaded> {
        self.state.get_or_try_init(|| self.initialize())
    }

    fn initialize(&self) -> Result<Loaded> {
        tracing::debug!("Initializing configuration (provider: {})", self.provider);

        let base = self.source.load_base()?;
        let secrets = self.source.load_secrets()?;

        let resolved = resolve(base, &secrets);
        let client = ClientParameterView::from_resolved(&resolved, &self.provider);

        tracing::info!(
            "Configuration resolved: {} secret(s) substituted, {} client parameter(s) for {}",
            resolved.secret_paths().len(),
            client.len(),
            self.provider
        );

        Ok(Loaded { resolved, client })
    }
}

impl<S> std::fmt::Debug for ConfigService<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigService")
            .field("provider", &self.provider)
            .field("initialized", &self.state.get().is_some())
            .finish_non_exhaustive()
    }
}
