//! Route handlers. Filesystem work runs on the blocking pool.

use super::error::ApiError;
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tuxedo_asset::{AssetCatalog, AssetInfo, AssetLocation, TextureKey};
use tuxedo_core::TuxedoError;
use tuxedo_scene::{ProjectInfo, Scene};

async fn blocking<T, F>(f: F) -> Result<T, ApiError>
where
    F: FnOnce() -> tuxedo_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

fn parse_scene(body: &[u8]) -> Result<Scene, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::from(TuxedoError::Json(e)))
}

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

pub(crate) async fn list_scenes(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, ApiError> {
    let scenes = state.scenes.clone();
    let names = blocking(move || scenes.list()).await?;
    Ok(Json(names))
}

pub(crate) async fn get_scene(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Scene>, ApiError> {
    let name = name.trim_start_matches('/').to_string();
    let scenes = state.scenes.clone();
    let scene = blocking(move || scenes.load(&name)).await?;
    Ok(Json(scene))
}

pub(crate) async fn update_scene(
    State(state): State<AppState>,
    Path(name): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let name = name.trim_start_matches('/').to_string();
    let scene = parse_scene(&body)?;
    let scenes = state.scenes.clone();
    blocking(move || scenes.save(&name, &scene)).await?;
    Ok(Json(json!({ "status": "success" })))
}

pub(crate) async fn create_scene(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let scene = parse_scene(&body)?;
    let scenes = state.scenes.clone();
    let path = blocking(move || scenes.create(&scene)).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": "created", "path": path.display().to_string() })),
    ))
}

pub(crate) async fn list_assets(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssetInfo>>, ApiError> {
    let resolver = state.resolver.clone();
    let catalog =
        blocking(move || AssetCatalog::load_from_directory(resolver.assets_root())).await?;
    Ok(Json(catalog.into_assets()))
}

pub(crate) async fn resolve_asset(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<AssetLocation>, ApiError> {
    let key = TextureKey::new(key)?;
    let resolver = state.resolver.clone();
    let location = blocking(move || resolver.resolve(&key)).await?;
    Ok(Json(location))
}

pub(crate) async fn resolve_missing_key() -> ApiError {
    TuxedoError::InvalidKey("Key is required".to_string()).into()
}

pub(crate) async fn project_info(
    State(state): State<AppState>,
) -> Result<Json<ProjectInfo>, ApiError> {
    let name = state.project_name.to_string();
    let scenes = state.scenes.clone();
    let info = blocking(move || ProjectInfo::collect(name, scenes.root())).await?;
    Ok(Json(info))
}

pub(crate) async fn get_prefab(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let scenes = state.scenes.clone();
    let lookup = id.clone();
    let entry = blocking(move || scenes.find_prefab(&lookup))
        .await?
        .ok_or(TuxedoError::PrefabNotFound(id))?;
    Ok(([(header::CONTENT_TYPE, "application/json")], entry.content).into_response())
}

pub(crate) async fn websocket() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({ "status": "not implemented yet" })),
    )
}
