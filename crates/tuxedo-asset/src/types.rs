//! Asset type definitions

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use tuxedo_core::{Result, TuxedoError};

/// Kind of file that defines a texture key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// `{key}-pack.json` manifest bundling related frames
    Pack,
    /// `{key}/{key}.json` sprite sheet stored in a folder named after the key
    Atlas,
}

/// A texture key, used verbatim as a file and directory basename
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TextureKey(String);

impl TextureKey {
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(TuxedoError::InvalidKey("Asset key is required".to_string()));
        }
        if key == "." || key == ".." || key.contains(['/', '\\']) {
            return Err(TuxedoError::InvalidKey(format!(
                "'{}' cannot be used as a file name",
                key
            )));
        }
        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// File name of the pack manifest for this key
    pub fn pack_file_name(&self) -> String {
        format!("{}-pack.json", self.0)
    }

    /// File name of the atlas description for this key
    pub fn atlas_file_name(&self) -> String {
        format!("{}.json", self.0)
    }
}

impl fmt::Display for TextureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TextureKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Outcome of resolving a texture key.
///
/// Paths are web paths (`/assets/...`) relative to the assets root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLocation {
    NotFound,
    Pack { path: String },
    /// `directory` is the folder holding the atlas, where its frames live
    Atlas { path: String, directory: String },
}

impl AssetLocation {
    pub fn is_found(&self) -> bool {
        !matches!(self, AssetLocation::NotFound)
    }

    pub fn kind(&self) -> Option<AssetKind> {
        match self {
            AssetLocation::NotFound => None,
            AssetLocation::Pack { .. } => Some(AssetKind::Pack),
            AssetLocation::Atlas { .. } => Some(AssetKind::Atlas),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            AssetLocation::NotFound => None,
            AssetLocation::Pack { path } | AssetLocation::Atlas { path, .. } => Some(path),
        }
    }

    pub fn directory(&self) -> Option<&str> {
        match self {
            AssetLocation::Atlas { directory, .. } => Some(directory),
            _ => None,
        }
    }
}

/// Wire shape: `{found, type?, path?, directory?}`
#[derive(Serialize)]
struct LocationBody<'a> {
    found: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<AssetKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    directory: Option<&'a str>,
}

impl Serialize for AssetLocation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        LocationBody {
            found: self.is_found(),
            kind: self.kind(),
            path: self.path(),
            directory: self.directory(),
        }
        .serialize(serializer)
    }
}

/// A servable file under the assets root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetInfo {
    pub name: String,
    /// Relative to the assets root, `/`-separated
    pub path: String,
    /// File extension without the dot
    #[serde(rename = "type")]
    pub file_type: String,
    pub size: u64,
}
