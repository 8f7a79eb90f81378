//! Tuxedo Server - HTTP editor backend
//!
//! Serves scene CRUD, asset listing and texture-key resolution as JSON,
//! plus the assets tree itself as static files.

pub mod config;
mod http;
pub mod logging;
mod server;
mod state;
pub mod watcher;

pub use config::{LogFormat, LoggingConfig, ProjectConfig, ServerConfig, TuxedoConfig};
pub use http::build_router;
pub use server::serve;
pub use state::{AllowedOrigins, AppState};
pub use watcher::SceneWatcher;
