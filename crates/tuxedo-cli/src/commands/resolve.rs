//! Texture key resolution command

use anyhow::{Context, Result};
use tuxedo_asset::{AssetLocationResolver, TextureKey};

pub fn run(key: &str, config: Option<&str>) -> Result<()> {
    let config = super::load_config(config)?;
    let key = TextureKey::new(key)?;

    let resolver = AssetLocationResolver::new(config.assets_root());
    let location = resolver
        .resolve(&key)
        .with_context(|| format!("Failed to resolve '{}'", key))?;

    println!("{}", serde_json::to_string_pretty(&location)?);

    Ok(())
}
