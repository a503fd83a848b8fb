//! Info command implementation

use anyhow::Result;
use layered_config::config::{ConfigService, API_KEYS_SECTION};

use super::utils::load;

pub fn run(service: &ConfigService) -> Result<()> {
    let config = load(service)?;

    println!("Project Name: {}", config.project_name().unwrap_or("-"));
    println!("Author: {}", config.author().unwrap_or("-"));

    let providers: Vec<&str> = config
        .get(API_KEYS_SECTION)
        .and_then(|v| v.as_object())
        .map(|section| section.keys().map(String::as_str).collect())
        .unwrap_or_default();
    if !providers.is_empty() {
        println!("Providers: {}", providers.join(", "));
    }

    Ok(())
}
