//! Layered configuration system
//!
//! Config is loaded with layers of precedence (highest wins):
//! 1. Environment variables: `TUXEDO_HOST`, `TUXEDO_PORT`, `TUXEDO_YUKON_PATH`, ...
//! 2. Explicit config file, or project-local `tuxedo.toml`
//! 3. Global: `~/.tuxedo/config.toml`
//! 4. Built-in defaults
//!
//! Command-line flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tuxedo_core::{Result, TuxedoError};

/// Name of the project-local config file
pub const LOCAL_CONFIG_FILE: &str = "tuxedo.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// `*` or a comma-separated list of origins
    pub allow_origins: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            allow_origins: "*".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    /// Root of the game project; the other paths are relative to it
    pub yukon_path: PathBuf,
    pub scenes_path: PathBuf,
    pub assets_path: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "Club Penguin".to_string(),
            yukon_path: PathBuf::from("../yukon"),
            scenes_path: PathBuf::from("src/scenes"),
            assets_path: PathBuf::from("assets"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub enabled: bool,
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuxedoConfig {
    pub server: ServerConfig,
    pub project: ProjectConfig,
    pub logging: LoggingConfig,
}

/// On-disk layer: every field optional so partial files only override
/// what they name
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    server: ServerLayer,
    #[serde(default)]
    project: ProjectLayer,
    #[serde(default)]
    logging: LoggingLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServerLayer {
    host: Option<String>,
    port: Option<u16>,
    allow_origins: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectLayer {
    name: Option<String>,
    yukon_path: Option<PathBuf>,
    scenes_path: Option<PathBuf>,
    assets_path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct LoggingLayer {
    enabled: Option<bool>,
    level: Option<String>,
    format: Option<LogFormat>,
}

impl TuxedoConfig {
    /// Load config with layered precedence: global < file < env vars.
    ///
    /// An explicit `path` must exist; without one, `tuxedo.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        // Layer 1: Global config (~/.tuxedo/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        // Layer 2: Explicit or project-local config
        match path {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
                if local_path.exists() {
                    config.merge(Self::load_file(&local_path)?);
                }
            }
        }

        // Layer 3: Environment variable overrides
        config.apply_env_overrides(|name| std::env::var(name).ok())?;

        Ok(config)
    }

    /// Load config from a specific file path only, over the defaults
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::load_file(path)?);
        Ok(config)
    }

    /// Write this config as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Directory served under `/assets`
    pub fn assets_root(&self) -> PathBuf {
        self.project.yukon_path.join(&self.project.assets_path)
    }

    /// Directory holding `.scene` files
    pub fn scenes_root(&self) -> PathBuf {
        self.project.yukon_path.join(&self.project.scenes_path)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Apply `TUXEDO_*` overrides read through `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("TUXEDO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("TUXEDO_PORT") {
            self.server.port = port.parse().map_err(|_| {
                TuxedoError::Config(format!("TUXEDO_PORT is not a valid port: {}", port))
            })?;
        }
        if let Some(path) = lookup("TUXEDO_YUKON_PATH") {
            self.project.yukon_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("TUXEDO_ASSETS_PATH") {
            self.project.assets_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("TUXEDO_SCENES_PATH") {
            self.project.scenes_path = PathBuf::from(path);
        }
        if let Some(level) = lookup("TUXEDO_LOG_LEVEL") {
            self.logging.level = level;
        }
        Ok(())
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".tuxedo").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<ConfigFile> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            TuxedoError::Config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        toml::from_str(&content).map_err(|e| {
            TuxedoError::Config(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge(&mut self, layer: ConfigFile) {
        let ConfigFile {
            server,
            project,
            logging,
        } = layer;

        if let Some(host) = server.host {
            self.server.host = host;
        }
        if let Some(port) = server.port {
            self.server.port = port;
        }
        if let Some(origins) = server.allow_origins {
            self.server.allow_origins = origins;
        }

        if let Some(name) = project.name {
            self.project.name = name;
        }
        if let Some(path) = project.yukon_path {
            self.project.yukon_path = path;
        }
        if let Some(path) = project.scenes_path {
            self.project.scenes_path = path;
        }
        if let Some(path) = project.assets_path {
            self.project.assets_path = path;
        }

        if let Some(enabled) = logging.enabled {
            self.logging.enabled = enabled;
        }
        if let Some(level) = logging.level {
            self.logging.level = level;
        }
        if let Some(format) = logging.format {
            self.logging.format = format;
        }
    }
}
