//! layered-config: inspect a configuration resolved against its secrets store
//!
//! Loads the YAML base configuration and the JSON secrets file, substitutes
//! `load_from_secrets` placeholders, and prints the result or the parameters
//! a chat-model client would be built with.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
