//! Slash-normalized paths for the web-facing side of the backend

use std::path::{Component, Path};

/// URL prefix under which the assets root is served
pub const ASSETS_URL_PREFIX: &str = "/assets";

/// Express `path` relative to `root` with `/` separators.
///
/// Returns `None` when `path` does not live under `root`. The root itself
/// maps to an empty string.
pub fn relative_slash_path(root: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    Some(parts.join("/"))
}

/// Web path for a file under the assets root, e.g. `/assets/media/games/x.json`
pub fn web_path(assets_root: &Path, path: &Path) -> Option<String> {
    let relative = relative_slash_path(assets_root, path)?;
    if relative.is_empty() {
        Some(ASSETS_URL_PREFIX.to_string())
    } else {
        Some(format!("{}/{}", ASSETS_URL_PREFIX, relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_relative_slash_path() {
        let root = PathBuf::from("/yukon/assets");
        let file = root.join("media").join("games").join("a.json");
        assert_eq!(
            relative_slash_path(&root, &file).as_deref(),
            Some("media/games/a.json")
        );
    }

    #[test]
    fn test_relative_path_outside_root() {
        let root = PathBuf::from("/yukon/assets");
        assert_eq!(relative_slash_path(&root, Path::new("/elsewhere/a.json")), None);
    }

    #[test]
    fn test_web_path_prefix() {
        let root = PathBuf::from("/yukon/assets");
        let dir = root.join("media").join("misc").join("icon_coin");
        assert_eq!(
            web_path(&root, &dir).as_deref(),
            Some("/assets/media/misc/icon_coin")
        );
        assert_eq!(web_path(&root, &root).as_deref(), Some("/assets"));
    }
}
