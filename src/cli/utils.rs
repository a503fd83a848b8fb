//! Shared CLI utilities.

use anyhow::{Context, Result};
use layered_config::config::{ConfigService, ResolvedConfig};

/// Replacement shown for secret values unless `--reveal` is given.
pub const MASK: &str = "********";

pub fn load(service: &ConfigService) -> Result<&ResolvedConfig> {
    service.full_config().context("Failed to load configuration")
}

/// Keep the first four characters of a credential and mask the rest.
pub fn mask_secret(value: &str) -> String {
    let visible: String = value.chars().take(4).collect();
    if visible.chars().count() == value.chars().count() {
        MASK.to_string()
    } else {
        format!("{visible}{MASK}")
    }
}
