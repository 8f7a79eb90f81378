//! HTTP surface

mod error;
mod handlers;
mod middleware;

use crate::state::AppState;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{any, get};
use axum::Router;
use tower_http::services::ServeDir;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/scenes",
            get(handlers::list_scenes).post(handlers::create_scene),
        )
        .route(
            "/scenes/*name",
            get(handlers::get_scene).put(handlers::update_scene),
        )
        .route("/assets", get(handlers::list_assets))
        .route("/assets/resolve/", get(handlers::resolve_missing_key))
        .route("/assets/resolve/:key", get(handlers::resolve_asset))
        .route("/project", get(handlers::project_info))
        .route("/prefab/:id", get(handlers::get_prefab))
        .route("/ws", any(handlers::websocket));

    Router::new()
        .route("/healthz", get(handlers::healthz))
        .nest("/api", api)
        .nest_service("/assets", ServeDir::new(state.resolver.assets_root()))
        .layer(from_fn_with_state(state.clone(), middleware::cors))
        .layer(from_fn(middleware::request_log))
        .with_state(state)
}
