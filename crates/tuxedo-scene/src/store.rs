//! Reading and writing `.scene` files under a scenes root

use crate::format::Scene;
use crate::prefab::{find_prefab, PrefabEntry};
use serde::Serialize;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tuxedo_core::{relative_slash_path, Result, TuxedoError};
use walkdir::WalkDir;

/// Extension of scene files, without the dot
pub const SCENE_EXTENSION: &str = "scene";

/// Scene files stored under one root directory.
///
/// Scene names are `/`-separated paths relative to the root, without the
/// `.scene` suffix (e.g. `rooms/Town`).
#[derive(Debug, Clone)]
pub struct SceneStore {
    root: PathBuf,
}

impl SceneStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Names of all scene files, in lexical walk order.
    ///
    /// A missing root lists as empty; unreadable entries are skipped.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        if !self.root.exists() {
            return Ok(names);
        }

        for entry in WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() || !is_scene_file(entry.path()) {
                continue;
            }
            if let Some(relative) = relative_slash_path(&self.root, entry.path()) {
                let name = relative
                    .strip_suffix(&format!(".{}", SCENE_EXTENSION))
                    .unwrap_or(&relative);
                names.push(name.to_string());
            }
        }

        Ok(names)
    }

    /// Load and parse the named scene
    pub fn load(&self, name: &str) -> Result<Scene> {
        let path = self.path_for(name)?;
        let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => TuxedoError::SceneNotFound(name.to_string()),
            _ => TuxedoError::Io(e),
        })?;
        serde_json::from_str(&content).map_err(|e| TuxedoError::CorruptScene {
            name: name.to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the named scene, replacing any existing file
    pub fn save(&self, name: &str, scene: &Scene) -> Result<PathBuf> {
        let path = self.path_for(name)?;
        let content = to_pretty_json(scene)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a new scene named after its `sceneKey`; never overwrites
    pub fn create(&self, scene: &Scene) -> Result<PathBuf> {
        let key = scene.settings.scene_key.as_str();
        if key.is_empty() {
            return Err(TuxedoError::InvalidScene("Scene key is required".to_string()));
        }
        let path = self.path_for(key)?;
        let content = to_pretty_json(scene)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => TuxedoError::SceneExists(key.to_string()),
                _ => TuxedoError::Io(e),
            })?;
        file.write_all(content.as_bytes())?;
        Ok(path)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// Search every scene file for the prefab with the given ID
    pub fn find_prefab(&self, id: &str) -> Result<Option<PrefabEntry>> {
        find_prefab(&self.root, id)
    }

    fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_scene_name(name)?;
        Ok(self.root.join(format!("{}.{}", name, SCENE_EXTENSION)))
    }
}

/// Reject names that would leave the scenes root
pub fn validate_scene_name(name: &str) -> Result<()> {
    let invalid = |reason: &str| Err(TuxedoError::InvalidSceneName(format!("'{}' {}", name, reason)));

    if name.is_empty() {
        return invalid("is empty");
    }
    if name.contains('\\') || name.contains('\0') {
        return invalid("contains a forbidden character");
    }
    if name.starts_with('/') {
        return invalid("must be relative");
    }
    if name
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return invalid("contains an empty or relative segment");
    }
    Ok(())
}

pub(crate) fn is_scene_file(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(SCENE_EXTENSION)
}

/// Pretty JSON with four-space indentation, the layout scene files use
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| TuxedoError::InvalidScene(e.to_string()))
}
