//! Check command implementation

use anyhow::Result;
use layered_config::config::ConfigService;

use super::utils::load;

pub fn run(service: &ConfigService) -> Result<()> {
    let config = load(service)?;

    let resolved = config.secret_paths();
    let unresolved = config.unresolved_paths();

    if unresolved.is_empty() {
        println!("All {} secret placeholder(s) resolved", resolved.len());
        return Ok(());
    }

    println!("Unresolved secrets:");
    for path in &unresolved {
        println!("  {}", path);
    }
    anyhow::bail!("{} secret placeholder(s) could not be resolved", unresolved.len())
}
