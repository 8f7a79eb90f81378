//! Prefab lookup by ID across every scene file

use crate::format::Scene;
use crate::store::is_scene_file;
use std::fs;
use std::path::{Path, PathBuf};
use tuxedo_core::{Result, TuxedoError};
use walkdir::WalkDir;

/// A prefab scene located on disk
#[derive(Debug, Clone)]
pub struct PrefabEntry {
    pub path: PathBuf,
    /// File content exactly as stored
    pub content: String,
    pub scene: Scene,
}

/// Find the first `.scene` file under `root` whose `id` is `id` and whose
/// `sceneType` is `PREFAB`.
///
/// Files are visited depth-first in lexical order. Unreadable files and
/// files that fail to parse are skipped.
pub fn find_prefab(root: &Path, id: &str) -> Result<Option<PrefabEntry>> {
    if id.is_empty() {
        return Err(TuxedoError::InvalidKey("Prefab ID is required".to_string()));
    }

    let found = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_scene_file(e.path()))
        .find_map(|entry| {
            let content = fs::read_to_string(entry.path()).ok()?;
            let scene: Scene = serde_json::from_str(&content).ok()?;
            (scene.id == id && scene.is_prefab()).then(|| PrefabEntry {
                path: entry.into_path(),
                content,
                scene,
            })
        });

    Ok(found)
}
