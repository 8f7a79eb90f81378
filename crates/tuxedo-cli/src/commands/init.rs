//! Config initialization command

use anyhow::{Context, Result};
use std::path::Path;
use tuxedo_server::TuxedoConfig;

pub fn run(path: &str, force: bool) -> Result<()> {
    let path = Path::new(path);

    if path.exists() && !force {
        anyhow::bail!("'{}' already exists (use --force to overwrite)", path.display());
    }

    TuxedoConfig::default()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created config: {}", path.display());
    println!();
    println!("Next steps:");
    println!("  Edit project.yukon_path to point at your game project");
    println!("  tuxedo serve");

    Ok(())
}
