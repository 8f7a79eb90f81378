//! Scene file format definitions

use serde::{Deserialize, Serialize};

/// `sceneType` value marking a scene as a reusable prefab
pub const PREFAB_SCENE_TYPE: &str = "PREFAB";

pub const COMPONENT_BUTTON: &str = "Button";
pub const COMPONENT_MOVE_TO: &str = "MoveTo";
pub const COMPONENT_ANIMATION: &str = "Animation";
pub const COMPONENT_SIMPLE_BUTTON: &str = "SimpleButton";

/// Root structure of a `.scene` file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub scene_type: String,
    #[serde(default)]
    pub settings: SceneSettings,
    #[serde(default)]
    pub display_list: Vec<GameObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<ObjectList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneSettings {
    #[serde(default)]
    pub scene_key: String,
    #[serde(default)]
    pub border_width: i64,
    #[serde(default)]
    pub border_height: i64,
    #[serde(default, rename = "preloadPackFiles")]
    pub preload_packs: Vec<String>,
}

/// A node of the display hierarchy.
///
/// Every known property is an explicit optional field; absent fields are
/// omitted when written back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameObject {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub object_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub x: f64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<Texture>,
    /// Container children
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list: Vec<GameObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prefab_id: String,
    /// Properties that override the prefab definition
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unlock: Vec<String>,

    // Text objects
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font_family: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font_size: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub font_style: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub color: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub stroke: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub align: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_right: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding_bottom: Option<f64>,
}

fn is_zero(v: &f64) -> bool {
    *v == 0.0
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Texture {
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub frame: String,
}

/// Named group of display-list object IDs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectList {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub object_ids: Vec<String>,
}

impl Scene {
    /// Create an empty scene with the given key
    pub fn new(scene_key: impl Into<String>) -> Self {
        Self {
            settings: SceneSettings {
                scene_key: scene_key.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    pub fn is_prefab(&self) -> bool {
        self.scene_type == PREFAB_SCENE_TYPE
    }

    /// Every texture key referenced by the display list, containers
    /// included, in first-seen order without duplicates
    pub fn texture_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for object in &self.display_list {
            collect_texture_keys(object, &mut keys);
        }
        keys
    }

    /// Total number of game objects, counting container children
    pub fn object_count(&self) -> usize {
        fn count(objects: &[GameObject]) -> usize {
            objects.iter().map(|o| 1 + count(&o.list)).sum()
        }
        count(&self.display_list)
    }
}

fn collect_texture_keys<'a>(object: &'a GameObject, keys: &mut Vec<&'a str>) {
    if let Some(texture) = &object.texture {
        if !texture.key.is_empty() && !keys.contains(&texture.key.as_str()) {
            keys.push(&texture.key);
        }
    }
    for child in &object.list {
        collect_texture_keys(child, keys);
    }
}

impl GameObject {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn with_texture(mut self, key: impl Into<String>) -> Self {
        self.texture = Some(Texture {
            key: key.into(),
            frame: String::new(),
        });
        self
    }

    pub fn with_child(mut self, child: GameObject) -> Self {
        self.list.push(child);
        self
    }

    pub fn has_component(&self, component: &str) -> bool {
        self.components.iter().any(|c| c == component)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    pub fn set_origin(&mut self, origin_x: f64, origin_y: f64) {
        self.origin_x = Some(origin_x);
        self.origin_y = Some(origin_y);
    }
}
