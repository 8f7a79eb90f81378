//! Tuxedo Scene - JSON scene files for the editor
//!
//! This crate models scene documents, reads and writes them under a scenes
//! root, finds prefabs by ID and gathers project statistics.

mod format;
mod prefab;
mod project;
mod store;

pub use format::{
    GameObject, ObjectList, Scene, SceneSettings, Texture, COMPONENT_ANIMATION, COMPONENT_BUTTON,
    COMPONENT_MOVE_TO, COMPONENT_SIMPLE_BUTTON, PREFAB_SCENE_TYPE,
};
pub use prefab::{find_prefab, PrefabEntry};
pub use project::ProjectInfo;
pub use store::{to_pretty_json, validate_scene_name, SceneStore, SCENE_EXTENSION};
