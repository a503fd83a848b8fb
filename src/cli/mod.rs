//! Command-line interface for layered-config
//!
//! Provides `info`, `show`, `client` and `check` subcommands over one shared
//! configuration service.

use anyhow::Result;
use clap::{Parser, Subcommand};
use layered_config::config::{ConfigPaths, ConfigService, DEFAULT_PROVIDER};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;
mod client;
mod info;
mod show;
mod utils;

/// Resolve layered configuration against a local secrets store
#[derive(Parser)]
#[command(name = "layered-config")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base configuration file (YAML)
    #[arg(long, global = true, value_name = "PATH", env = "LAYERED_CONFIG_FILE")]
    config_file: Option<PathBuf>,

    /// Secrets file (JSON)
    #[arg(long, global = true, value_name = "PATH", env = "LAYERED_SECRETS_FILE")]
    secrets_file: Option<PathBuf>,

    /// Provider under `api_keys` used for client parameters
    #[arg(long, global = true, value_name = "NAME", default_value = DEFAULT_PROVIDER)]
    provider: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Show project name and author
    Info,

    /// Print the resolved configuration
    Show(show::ShowArgs),

    /// Print the parameters a chat-model client would be built with
    Client(client::ClientArgs),

    /// List placeholders that could not be resolved
    Check,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let mut paths = ConfigPaths::default();
    if let Some(path) = cli.config_file {
        paths = paths.config_file(path);
    }
    if let Some(path) = cli.secrets_file {
        paths = paths.secrets_file(path);
    }
    let service = ConfigService::from_paths(paths).provider(cli.provider);

    match cli.command {
        Commands::Info => info::run(&service),
        Commands::Show(args) => show::run(args, &service),
        Commands::Client(args) => client::run(args, &service),
        Commands::Check => check::run(&service),
    }
}
