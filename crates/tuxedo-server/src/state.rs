//! Shared handler state

use crate::config::TuxedoConfig;
use axum::http::HeaderValue;
use std::path::Path;
use std::sync::Arc;
use tuxedo_asset::AssetLocationResolver;
use tuxedo_scene::SceneStore;

/// Origins allowed to make cross-origin requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

impl AllowedOrigins {
    /// Parse `*` or a comma-separated origin list
    pub fn parse(list: &str) -> Self {
        let origins: Vec<String> = list
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
        if origins.iter().any(|o| o == "*") {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }

    /// Value for `access-control-allow-origin`, if the request may have one
    pub fn allow(&self, origin: Option<&str>) -> Option<HeaderValue> {
        match self {
            AllowedOrigins::Any => Some(HeaderValue::from_static("*")),
            AllowedOrigins::List(list) => {
                let origin = origin?;
                if list.iter().any(|o| o == origin) {
                    HeaderValue::from_str(origin).ok()
                } else {
                    None
                }
            }
        }
    }
}

/// Everything handlers need, built once from the config
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<AssetLocationResolver>,
    pub scenes: Arc<SceneStore>,
    pub project_name: Arc<str>,
    pub allowed_origins: Arc<AllowedOrigins>,
}

impl AppState {
    pub fn new(
        assets_root: impl AsRef<Path>,
        scenes_root: impl AsRef<Path>,
        project_name: &str,
        allowed_origins: AllowedOrigins,
    ) -> Self {
        Self {
            resolver: Arc::new(AssetLocationResolver::new(assets_root)),
            scenes: Arc::new(SceneStore::new(scenes_root)),
            project_name: Arc::from(project_name),
            allowed_origins: Arc::new(allowed_origins),
        }
    }

    pub fn from_config(config: &TuxedoConfig) -> Self {
        Self::new(
            config.assets_root(),
            config.scenes_root(),
            &config.project.name,
            AllowedOrigins::parse(&config.server.allow_origins),
        )
    }
}
