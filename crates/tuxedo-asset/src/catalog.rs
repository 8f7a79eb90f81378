//! Listing of servable files under the assets root

use crate::types::AssetInfo;
use std::path::Path;
use tuxedo_core::{relative_slash_path, Result, TuxedoError};
use walkdir::WalkDir;

/// File extensions included in an asset listing
pub const LISTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "json", "atlas"];

/// Snapshot of the servable files under an assets root, in walk order
#[derive(Debug, Default)]
pub struct AssetCatalog {
    assets: Vec<AssetInfo>,
}

impl AssetCatalog {
    /// Walk the whole assets tree and collect every listed file.
    ///
    /// Entries of each directory are visited in lexical order. Any walk
    /// error aborts the scan.
    pub fn load_from_directory<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();
        if !root.is_dir() {
            return Err(TuxedoError::Resolution {
                path: root.display().to_string(),
                reason: "not a directory".to_string(),
            });
        }

        let mut catalog = Self::default();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Some(ext) = entry.path().extension().and_then(|e| e.to_str()) else {
                continue;
            };
            if !LISTED_EXTENSIONS.contains(&ext) {
                continue;
            }

            let Some(path) = relative_slash_path(root, entry.path()) else {
                continue;
            };
            catalog.assets.push(AssetInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                path,
                file_type: ext.to_string(),
                size: entry.metadata().map_err(std::io::Error::from)?.len(),
            });
        }

        Ok(catalog)
    }

    pub fn assets(&self) -> &[AssetInfo] {
        &self.assets
    }

    /// All listed files with the given extension
    pub fn by_type(&self, file_type: &str) -> Vec<&AssetInfo> {
        self.assets
            .iter()
            .filter(|a| a.file_type == file_type)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn into_assets(self) -> Vec<AssetInfo> {
        self.assets
    }
}
