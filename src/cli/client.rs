//! Client command implementation

use anyhow::{Context, Result};
use clap::Args;
use layered_config::config::{ClientParam, ConfigService, MISSING};
use serde_json::Value;

use super::utils::mask_secret;

#[derive(Args)]
pub struct ClientArgs {
    /// Print the API key instead of masking it
    #[arg(long)]
    pub reveal: bool,
}

pub fn run(args: ClientArgs, service: &ConfigService) -> Result<()> {
    let params = service.client_params().context("Failed to load configuration")?;

    let mut map = params.to_map();
    if !args.reveal {
        if let Some(Value::String(key)) = map.get_mut(ClientParam::ApiKey.as_str()) {
            if key.as_str() != MISSING {
                let masked = mask_secret(key);
                *key = masked;
            }
        }
    }
    println!("{}", serde_json::to_string_pretty(&map).context("Failed to render JSON")?);

    if params.is_empty() {
        tracing::warn!("No client parameters found for provider '{}'", service.provider_name());
    }
    params.require_api_key()?;

    Ok(())
}
