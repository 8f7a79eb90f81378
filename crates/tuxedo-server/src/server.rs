//! Server startup

use crate::config::TuxedoConfig;
use crate::http::build_router;
use crate::state::AppState;
use crate::watcher::SceneWatcher;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tuxedo_core::Result;

/// Bind the configured address and serve until ctrl-c
pub async fn serve(config: &TuxedoConfig, watch: bool) -> Result<()> {
    let assets_root = config.assets_root();
    let scenes_root = config.scenes_root();

    if !assets_root.is_dir() {
        warn!(path = %assets_root.display(), "assets directory not found");
    }

    let _watcher = if watch {
        match SceneWatcher::start(&scenes_root) {
            Ok(watcher) => Some(watcher),
            Err(e) => {
                warn!(error = %e, "scene watcher disabled");
                None
            }
        }
    } else {
        None
    };

    let app = build_router(AppState::from_config(config));
    let address = config.bind_address();
    let listener = TcpListener::bind(address.as_str()).await?;

    info!(
        %address,
        project = %config.project.name,
        assets = %assets_root.display(),
        scenes = %scenes_root.display(),
        "tuxedo server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
