//! Error types for Tuxedo

use thiserror::Error;

/// The main error type for Tuxedo operations
#[derive(Debug, Error)]
pub enum TuxedoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),

    /// The assets root itself is unusable; distinct from an absent asset
    #[error("Failed to resolve assets path {path}: {reason}")]
    Resolution { path: String, reason: String },

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid scene name: {0}")]
    InvalidSceneName(String),

    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    #[error("Scene already exists: {0}")]
    SceneExists(String),

    /// A stored scene file that no longer parses
    #[error("Scene {name} is corrupt: {reason}")]
    CorruptScene { name: String, reason: String },

    #[error("Invalid scene: {0}")]
    InvalidScene(String),

    #[error("Prefab not found: {0}")]
    PrefabNotFound(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Watch error: {0}")]
    Watch(String),
}

/// Result type alias for Tuxedo operations
pub type Result<T> = std::result::Result<T, TuxedoError>;

impl From<toml::de::Error> for TuxedoError {
    fn from(err: toml::de::Error) -> Self {
        TuxedoError::TomlParse(err.to_string())
    }
}

impl From<toml::ser::Error> for TuxedoError {
    fn from(err: toml::ser::Error) -> Self {
        TuxedoError::TomlSer(err.to_string())
    }
}
