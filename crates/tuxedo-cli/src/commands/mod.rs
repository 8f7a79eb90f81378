//! CLI command implementations

pub mod init;
pub mod resolve;
pub mod scene;
pub mod serve;

use anyhow::{Context, Result};
use std::path::Path;
use tuxedo_server::TuxedoConfig;

/// Load the layered config, optionally from an explicit file
pub(crate) fn load_config(path: Option<&str>) -> Result<TuxedoConfig> {
    TuxedoConfig::load(path.map(Path::new)).context("Failed to load config")
}
