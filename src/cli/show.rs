//! Show command implementation

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use layered_config::config::ConfigService;

use super::utils::{load, MASK};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
    pub format: OutputFormat,

    /// Print secret values instead of masking them
    #[arg(long)]
    pub reveal: bool,
}

pub fn run(args: ShowArgs, service: &ConfigService) -> Result<()> {
    let config = load(service)?;

    let tree = if args.reveal { config.tree().clone() } else { config.redacted(MASK) };

    let rendered = match args.format {
        OutputFormat::Yaml => serde_yaml::to_string(&tree).context("Failed to render YAML")?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&tree).context("Failed to render JSON")?;
            json.push('\n');
            json
        }
    };
    print!("{}", rendered);

    Ok(())
}
