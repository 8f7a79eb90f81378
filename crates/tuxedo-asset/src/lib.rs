//! Tuxedo Asset - Locating texture definitions in the media tree
//!
//! This crate maps opaque texture keys to the pack or atlas file that
//! defines them, and lists the servable files under the assets root.

mod catalog;
mod resolver;
mod types;

pub use catalog::{AssetCatalog, LISTED_EXTENSIONS};
pub use resolver::{AssetLocationResolver, MEDIA_DIR, MEDIA_SUBDIRECTORIES};
pub use types::{AssetInfo, AssetKind, AssetLocation, TextureKey};
