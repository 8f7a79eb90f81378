//! Project statistics gathered from the scenes root

use crate::store::is_scene_file;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tuxedo_core::{relative_slash_path, Result};
use walkdir::WalkDir;

/// Summary of the scenes tree shown by the editor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    pub path: String,
    pub scene_count: usize,
    /// Every sub-folder of the scenes root, relative and `/`-separated
    pub folders: Vec<String>,
}

impl ProjectInfo {
    /// Walk the scenes root counting scene files and collecting folders.
    /// Any walk error, including a missing root, is returned.
    pub fn collect(name: impl Into<String>, scenes_root: &Path) -> Result<Self> {
        let mut info = ProjectInfo {
            name: name.into(),
            path: scenes_root.display().to_string(),
            scene_count: 0,
            folders: Vec::new(),
        };

        for entry in WalkDir::new(scenes_root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if entry.file_type().is_dir() {
                if entry.depth() > 0 {
                    if let Some(folder) = relative_slash_path(scenes_root, entry.path()) {
                        info.folders.push(folder);
                    }
                }
            } else if is_scene_file(entry.path()) {
                info.scene_count += 1;
            }
        }

        Ok(info)
    }
}
