use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use tempfile::{tempdir, TempDir};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tuxedo_server::{build_router, AllowedOrigins, AppState};

struct Fixture {
    _dir: TempDir,
    assets: std::path::PathBuf,
    scenes: std::path::PathBuf,
}

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().expect("parent")).expect("create parent");
    fs::write(path, content).expect("write fixture");
}

fn fixture() -> Fixture {
    let dir = tempdir().expect("tempdir");
    let assets = dir.path().join("assets");
    let scenes = dir.path().join("scenes");

    write(
        &assets.join("media/games/puffle_launch/puffle_launch-pack.json"),
        r#"{"files":[]}"#,
    );
    write(
        &assets.join("media/misc/icon_coin/icon_coin.json"),
        r#"{"frames":{}}"#,
    );
    write(
        &scenes.join("rooms/town.scene"),
        r#"{"id":"town","sceneType":"SCENE","settings":{"sceneKey":"rooms/town"},"displayList":[]}"#,
    );
    write(
        &scenes.join("prefabs/door.scene"),
        r#"{"id":"door","sceneType":"PREFAB","settings":{"sceneKey":"prefabs/door"},"displayList":[]}"#,
    );

    Fixture {
        _dir: dir,
        assets,
        scenes,
    }
}

async fn spawn(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(state);
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

async fn spawn_fixture(f: &Fixture) -> SocketAddr {
    spawn(AppState::new(
        &f.assets,
        &f.scenes,
        "Test Island",
        AllowedOrigins::Any,
    ))
    .await
}

async fn send_raw(
    addr: SocketAddr,
    method: &str,
    path: &str,
    extra_headers: &str,
    body: &str,
) -> (u16, String, String) {
    let mut stream = tokio::net::TcpStream::connect(addr)
        .await
        .expect("connect server");
    let req = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n{extra_headers}Content-Type: application/json\r\nContent-Length: {}\r\n\r\n{body}",
        body.len()
    );
    stream
        .write_all(req.as_bytes())
        .await
        .expect("write request");
    let mut response = String::new();
    stream
        .read_to_string(&mut response)
        .await
        .expect("read response");
    let (head, body) = response
        .split_once("\r\n\r\n")
        .expect("http response separator");
    let status = head
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|s| s.parse::<u16>().ok())
        .expect("status");
    (status, head.to_string(), body.to_string())
}

async fn get(addr: SocketAddr, path: &str) -> (u16, String, String) {
    send_raw(addr, "GET", path, "", "").await
}

fn json(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("json body")
}

#[tokio::test]
async fn resolve_finds_pack_and_atlas_and_reports_missing() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (status, _, body) = get(addr, "/api/assets/resolve/puffle_launch").await;
    assert_eq!(status, 200);
    assert_eq!(
        json(&body),
        serde_json::json!({
            "found": true,
            "type": "pack",
            "path": "/assets/media/games/puffle_launch/puffle_launch-pack.json"
        })
    );

    let (status, _, body) = get(addr, "/api/assets/resolve/icon_coin").await;
    assert_eq!(status, 200);
    assert_eq!(
        json(&body),
        serde_json::json!({
            "found": true,
            "type": "atlas",
            "path": "/assets/media/misc/icon_coin/icon_coin.json",
            "directory": "/assets/media/misc/icon_coin"
        })
    );

    let (status, _, body) = get(addr, "/api/assets/resolve/nonexistent_key").await;
    assert_eq!(status, 200);
    assert_eq!(json(&body), serde_json::json!({ "found": false }));
}

#[tokio::test]
async fn resolve_rejects_bad_keys() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (status, _, body) = get(addr, "/api/assets/resolve/").await;
    assert_eq!(status, 400);
    assert!(json(&body)["error"].is_string());

    let (status, _, _) = get(addr, "/api/assets/resolve/..").await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn resolve_with_missing_root_is_server_error() {
    let dir = tempdir().expect("tempdir");
    let addr = spawn(AppState::new(
        dir.path().join("no_such_assets"),
        dir.path().join("scenes"),
        "Test Island",
        AllowedOrigins::Any,
    ))
    .await;

    let (status, _, body) = get(addr, "/api/assets/resolve/puffle_launch").await;
    assert_eq!(status, 500);
    assert!(json(&body)["error"].as_str().is_some());
}

#[tokio::test]
async fn scene_list_and_load() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (status, _, body) = get(addr, "/api/scenes").await;
    assert_eq!(status, 200);
    assert_eq!(json(&body), serde_json::json!(["prefabs/door", "rooms/town"]));

    let (status, _, body) = get(addr, "/api/scenes/rooms/town").await;
    assert_eq!(status, 200);
    let scene = json(&body);
    assert_eq!(scene["id"], "town");
    assert_eq!(scene["settings"]["sceneKey"], "rooms/town");

    let (status, _, _) = get(addr, "/api/scenes/rooms/missing").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn corrupt_scene_on_disk_is_server_error() {
    let f = fixture();
    write(&f.scenes.join("Broken.scene"), "{ not json");
    let addr = spawn_fixture(&f).await;

    let (status, _, body) = get(addr, "/api/scenes/Broken").await;
    assert_eq!(status, 500);
    assert!(json(&body)["error"]
        .as_str()
        .is_some_and(|msg| msg.contains("Broken")));
}

#[tokio::test]
async fn scene_create_conflict_and_update() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;
    let new_scene =
        r#"{"id":"dock","sceneType":"SCENE","settings":{"sceneKey":"rooms/dock"},"displayList":[]}"#;

    let (status, _, body) = send_raw(addr, "POST", "/api/scenes", "", new_scene).await;
    assert_eq!(status, 201);
    assert_eq!(json(&body)["status"], "created");
    assert!(f.scenes.join("rooms/dock.scene").is_file());

    let (status, _, _) = send_raw(addr, "POST", "/api/scenes", "", new_scene).await;
    assert_eq!(status, 409);

    let updated =
        r#"{"id":"dock","sceneType":"SCENE","settings":{"sceneKey":"rooms/dock","borderWidth":760},"displayList":[]}"#;
    let (status, _, body) = send_raw(addr, "PUT", "/api/scenes/rooms/dock", "", updated).await;
    assert_eq!(status, 200);
    assert_eq!(json(&body), serde_json::json!({ "status": "success" }));

    let (_, _, body) = get(addr, "/api/scenes/rooms/dock").await;
    assert_eq!(json(&body)["settings"]["borderWidth"], 760);
}

#[tokio::test]
async fn scene_writes_reject_bad_input() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (status, _, _) = send_raw(addr, "POST", "/api/scenes", "", "{not json").await;
    assert_eq!(status, 400);

    let (status, _, _) = send_raw(addr, "POST", "/api/scenes", "", r#"{"id":"x"}"#).await;
    assert_eq!(status, 400);

    let (status, _, _) = send_raw(
        addr,
        "PUT",
        "/api/scenes/rooms/../../escape",
        "",
        r#"{"id":"x"}"#,
    )
    .await;
    assert_eq!(status, 400);
}

#[tokio::test]
async fn assets_project_and_prefab() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (status, _, body) = get(addr, "/api/assets").await;
    assert_eq!(status, 200);
    let assets = json(&body);
    let paths: Vec<&str> = assets
        .as_array()
        .expect("asset array")
        .iter()
        .filter_map(|a| a["path"].as_str())
        .collect();
    assert_eq!(
        paths,
        vec![
            "media/games/puffle_launch/puffle_launch-pack.json",
            "media/misc/icon_coin/icon_coin.json",
        ]
    );
    assert_eq!(assets[0]["type"], "json");

    let (status, _, body) = get(addr, "/api/project").await;
    assert_eq!(status, 200);
    let project = json(&body);
    assert_eq!(project["name"], "Test Island");
    assert_eq!(project["sceneCount"], 2);

    let (status, head, body) = get(addr, "/api/prefab/door").await;
    assert_eq!(status, 200);
    assert!(head.to_ascii_lowercase().contains("content-type: application/json"));
    assert_eq!(
        body,
        fs::read_to_string(f.scenes.join("prefabs/door.scene")).expect("read prefab")
    );

    let (status, _, _) = get(addr, "/api/prefab/town").await;
    assert_eq!(status, 404);
}

#[tokio::test]
async fn static_assets_health_and_ws_stub() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (status, _, body) = get(addr, "/assets/media/misc/icon_coin/icon_coin.json").await;
    assert_eq!(status, 200);
    assert_eq!(body, r#"{"frames":{}}"#);

    let (status, _, body) = get(addr, "/healthz").await;
    assert_eq!(status, 200);
    assert_eq!(body, "ok");

    let (status, _, body) = get(addr, "/api/ws").await;
    assert_eq!(status, 501);
    assert_eq!(json(&body), serde_json::json!({ "status": "not implemented yet" }));
}

#[tokio::test]
async fn cors_wildcard_and_preflight() {
    let f = fixture();
    let addr = spawn_fixture(&f).await;

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/api/scenes",
        "Origin: http://editor.test\r\n",
        "",
    )
    .await;
    assert!(head
        .to_ascii_lowercase()
        .contains("access-control-allow-origin: *"));

    let (status, head, _) = send_raw(
        addr,
        "OPTIONS",
        "/api/scenes",
        "Origin: http://editor.test\r\n",
        "",
    )
    .await;
    assert_eq!(status, 204);
    let head = head.to_ascii_lowercase();
    assert!(head.contains("access-control-allow-methods: get,post,put,options"));
    assert!(head.contains("access-control-allow-headers: content-type"));
}

#[tokio::test]
async fn cors_allow_list_echoes_known_origin_only() {
    let f = fixture();
    let addr = spawn(AppState::new(
        &f.assets,
        &f.scenes,
        "Test Island",
        AllowedOrigins::parse("http://editor.test"),
    ))
    .await;

    let (_, head, _) = send_raw(
        addr,
        "GET",
        "/healthz",
        "Origin: http://editor.test\r\n",
        "",
    )
    .await;
    assert!(head
        .to_ascii_lowercase()
        .contains("access-control-allow-origin: http://editor.test"));

    let (_, head, _) = send_raw(addr, "GET", "/healthz", "Origin: http://evil.test\r\n", "").await;
    assert!(!head
        .to_ascii_lowercase()
        .contains("access-control-allow-origin"));
}
