//! layered-config: resolve a base configuration against a local secrets store
//!
//! A YAML base configuration may mark any leaf as `load_from_secrets`; those
//! leaves are filled from a JSON secrets file keyed the same way. The result
//! is exposed through [`config::ConfigService`], which loads and resolves once
//! per service instance and hands out shared, read-only views afterwards.

pub mod config;

pub use config::{
    ClientParam, ClientParameterView, ConfigError, ConfigPaths, ConfigService, ConfigSource,
    ConfigTree, FileSource, ResolvedConfig,
};
