//! Tuxedo Core - Foundational types for the Tuxedo editor backend
//!
//! This crate provides the pieces every other Tuxedo crate depends on:
//! - `TuxedoError` and the `Result` alias
//! - Slash-normalized relative paths and `/assets` web paths

mod error;
mod path;

pub use error::{Result, TuxedoError};
pub use path::{relative_slash_path, web_path, ASSETS_URL_PREFIX};
