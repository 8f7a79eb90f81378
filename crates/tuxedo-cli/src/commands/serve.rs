//! HTTP server command

use anyhow::{Context, Result};
use std::path::PathBuf;
use tuxedo_server::logging::init_tracing;

pub struct ServeArgs {
    pub config: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub yukon_path: Option<String>,
    pub watch: bool,
}

pub fn run(args: ServeArgs) -> Result<()> {
    let mut config = super::load_config(args.config.as_deref())?;

    // Flags beat every config layer
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(path) = args.yukon_path {
        config.project.yukon_path = PathBuf::from(path);
    }

    init_tracing(&config.logging);

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime
        .block_on(tuxedo_server::serve(&config, args.watch))
        .context("Server failed")?;

    Ok(())
}
