//! Scene file watcher
//!
//! Logs `.scene` files that change under the scenes root. Nothing is
//! pushed to clients.

use notify_debouncer_mini::notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebounceEventResult, Debouncer};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;
use tracing::{info, warn};
use tuxedo_core::{relative_slash_path, Result, TuxedoError};
use tuxedo_scene::SCENE_EXTENSION;

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Keeps the debouncer alive; watching stops when this is dropped
pub struct SceneWatcher {
    _debouncer: Debouncer<RecommendedWatcher>,
}

impl SceneWatcher {
    /// Watch `root` recursively, logging on a background thread
    pub fn start(root: &Path) -> Result<Self> {
        let (tx, rx) = mpsc::channel::<DebounceEventResult>();

        let mut debouncer =
            new_debouncer(DEBOUNCE, tx).map_err(|e| TuxedoError::Watch(e.to_string()))?;
        debouncer
            .watcher()
            .watch(root, RecursiveMode::Recursive)
            .map_err(|e| TuxedoError::Watch(format!("{}: {}", root.display(), e)))?;

        info!(root = %root.display(), "watching scenes");

        // Events carry absolute paths
        let root = root.canonicalize().unwrap_or_else(|_| root.to_path_buf());
        std::thread::spawn(move || {
            for result in rx {
                match result {
                    Ok(events) => {
                        for event in events {
                            if let Some(scene) = scene_name_for(&root, &event.path) {
                                info!(%scene, "scene changed");
                            }
                        }
                    }
                    Err(e) => warn!(error = ?e, "watch error"),
                }
            }
        });

        Ok(Self {
            _debouncer: debouncer,
        })
    }
}

/// Scene name for a changed path, or `None` if it is not a scene file
/// under `root`
pub fn scene_name_for(root: &Path, path: &Path) -> Option<String> {
    if path.extension().and_then(|e| e.to_str()) != Some(SCENE_EXTENSION) {
        return None;
    }
    let rel = relative_slash_path(root, path)?;
    rel.strip_suffix(&format!(".{}", SCENE_EXTENSION))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_scene_name_for_nested_scene() {
        let root = PathBuf::from("/project/scenes");
        let path = root.join("rooms").join("town.scene");
        assert_eq!(scene_name_for(&root, &path), Some("rooms/town".to_string()));
    }

    #[test]
    fn test_scene_name_for_ignores_other_files() {
        let root = PathBuf::from("/project/scenes");
        assert_eq!(scene_name_for(&root, &root.join("notes.txt")), None);
        assert_eq!(scene_name_for(&root, &root.join("rooms")), None);
    }

    #[test]
    fn test_scene_name_for_outside_root() {
        let root = PathBuf::from("/project/scenes");
        let path = PathBuf::from("/elsewhere/town.scene");
        assert_eq!(scene_name_for(&root, &path), None);
    }

    #[test]
    fn test_start_on_missing_root_fails() {
        let root = std::env::temp_dir().join(format!("tuxedo_watch_missing_{}", std::process::id()));
        assert!(matches!(
            SceneWatcher::start(&root),
            Err(TuxedoError::Watch(_))
        ));
    }
}
