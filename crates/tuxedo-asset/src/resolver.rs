//! Texture key resolution against the media tree
//!
//! Resolution runs in two phases, first match wins:
//!
//! 1. Direct patterns. For every declared media subdirectory, in order, try
//!    `{subdir}/{key}/{key}-pack.json`, `{subdir}/game/{key}/{key}-pack.json`,
//!    `{subdir}/{key}/{key}.json` and `{subdir}/game/{key}/{key}.json`.
//! 2. Recursive fallback. Walk `media/` depth-first with entries of each
//!    directory visited in lexical file-name order. The first
//!    `{key}-pack.json`, or `{key}.json` sitting in a folder named `{key}`,
//!    wins.

use crate::types::{AssetKind, AssetLocation, TextureKey};
use std::fs;
use std::path::{Path, PathBuf};
use tuxedo_core::{web_path, Result, TuxedoError};
use walkdir::WalkDir;

/// Directory under the assets root that holds all texture definitions
pub const MEDIA_DIR: &str = "media";

/// Top-level media categories, in search priority order
pub const MEDIA_SUBDIRECTORIES: [&str; 18] = [
    "games",
    "rooms",
    "interface",
    "artifacts",
    "clothing",
    "crumbs",
    "flash",
    "furniture",
    "igloos",
    "mainmenu",
    "misc",
    "music",
    "penguin",
    "postcards",
    "preload",
    "puffles",
    "shared",
    "sounds",
];

/// Folder that some categories nest their per-key folders under
const GAME_DIR: &str = "game";

/// One candidate path shape tried inside each media subdirectory
#[derive(Debug, Clone, Copy)]
struct PathShape {
    nested_in_game: bool,
    kind: AssetKind,
}

const PATH_SHAPES: [PathShape; 4] = [
    PathShape { nested_in_game: false, kind: AssetKind::Pack },
    PathShape { nested_in_game: true, kind: AssetKind::Pack },
    PathShape { nested_in_game: false, kind: AssetKind::Atlas },
    PathShape { nested_in_game: true, kind: AssetKind::Atlas },
];

impl PathShape {
    fn candidate(&self, media: &Path, subdir: &str, key: &TextureKey) -> PathBuf {
        let mut dir = media.join(subdir);
        if self.nested_in_game {
            dir.push(GAME_DIR);
        }
        dir.push(key.as_str());
        let file_name = match self.kind {
            AssetKind::Pack => key.pack_file_name(),
            AssetKind::Atlas => key.atlas_file_name(),
        };
        dir.join(file_name)
    }
}

/// Resolves texture keys to the pack or atlas file defining them.
///
/// Holds no state beyond the configured assets root; every call walks the
/// filesystem afresh.
#[derive(Debug, Clone)]
pub struct AssetLocationResolver {
    assets_root: PathBuf,
}

impl AssetLocationResolver {
    pub fn new<P: AsRef<Path>>(assets_root: P) -> Self {
        Self {
            assets_root: assets_root.as_ref().to_path_buf(),
        }
    }

    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }

    /// Resolve `key` to its defining file.
    ///
    /// Only an unusable assets root is an error. An absent asset is
    /// `AssetLocation::NotFound`.
    pub fn resolve(&self, key: &TextureKey) -> Result<AssetLocation> {
        let root = self.usable_root()?;
        let media = root.join(MEDIA_DIR);

        let found = direct_candidates(&media, key)
            .find(|(_, path)| path.is_file())
            .or_else(|| scan_media_tree(&media, key));

        Ok(found
            .and_then(|(kind, path)| locate(&root, &path, kind))
            .unwrap_or(AssetLocation::NotFound))
    }

    /// Absolute, canonical form of the assets root, checked to be a
    /// readable directory
    fn usable_root(&self) -> Result<PathBuf> {
        let resolution_error = |reason: String| TuxedoError::Resolution {
            path: self.assets_root.display().to_string(),
            reason,
        };

        let root = fs::canonicalize(&self.assets_root).map_err(|e| resolution_error(e.to_string()))?;
        if !root.is_dir() {
            return Err(resolution_error("not a directory".to_string()));
        }
        fs::read_dir(&root).map_err(|e| resolution_error(e.to_string()))?;
        Ok(root)
    }
}

/// Lazily yields direct-pattern candidates, subdirectory-outer and
/// shape-inner
fn direct_candidates<'a>(
    media: &'a Path,
    key: &'a TextureKey,
) -> impl Iterator<Item = (AssetKind, PathBuf)> + 'a {
    MEDIA_SUBDIRECTORIES.into_iter().flat_map(move |subdir| {
        PATH_SHAPES
            .into_iter()
            .map(move |shape| (shape.kind, shape.candidate(media, subdir, key)))
    })
}

/// Depth-first walk of the media tree, stopping at the first match.
/// Unreadable entries are skipped.
fn scan_media_tree(media: &Path, key: &TextureKey) -> Option<(AssetKind, PathBuf)> {
    let pack_name = key.pack_file_name();
    let atlas_name = key.atlas_file_name();

    WalkDir::new(media)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .find_map(|entry| {
            let file_name = entry.file_name().to_str()?;
            if file_name == pack_name {
                return Some((AssetKind::Pack, entry.into_path()));
            }
            if file_name == atlas_name && parent_name(entry.path()) == Some(key.as_str()) {
                return Some((AssetKind::Atlas, entry.into_path()));
            }
            None
        })
}

fn parent_name(path: &Path) -> Option<&str> {
    path.parent()?.file_name()?.to_str()
}

fn locate(root: &Path, file: &Path, kind: AssetKind) -> Option<AssetLocation> {
    let path = web_path(root, file)?;
    match kind {
        AssetKind::Pack => Some(AssetLocation::Pack { path }),
        AssetKind::Atlas => {
            let directory = web_path(root, file.parent()?)?;
            Some(AssetLocation::Atlas { path, directory })
        }
    }
}
