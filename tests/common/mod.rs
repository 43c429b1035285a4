#![allow(dead_code)]

use axum::{
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tokio::net::TcpListener;

use faceit_lookup::{FaceitClient, SteamClient};

pub const FACEIT_KEY: &str = "faceit-test-key";
pub const STEAM_KEY: &str = "steam-test-key";
pub const KNOWN_STEAM_ID: &str = "76561198000000000";
pub const KNOWN_PLAYER_ID: &str = "0b9f4c2e-5a1d-4c7e-8f3a-2d6b9e1c7a40";

pub fn read_fixture(name: &str) -> Value {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    serde_json::from_str(&raw).expect("fixture should be valid JSON")
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Accepts connections and never answers.
pub async fn serve_silence() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });
    format!("http://{addr}")
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {FACEIT_KEY}"))
}

fn faceit_error(status: StatusCode, message: &str) -> axum::response::Response {
    (status, Json(json!({ "errors": [{ "message": message, "code": "err" }] }))).into_response()
}

async fn players(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return faceit_error(StatusCode::UNAUTHORIZED, "invalid token");
    }

    let by_steam = params.get("game").map(String::as_str) == Some("cs2")
        && params.get("game_player_id").map(String::as_str) == Some(KNOWN_STEAM_ID);
    match params.get("nickname").map(String::as_str) {
        _ if by_steam => Json(read_fixture("faceit_player.json")).into_response(),
        Some("s1mple") => Json(read_fixture("faceit_player.json")).into_response(),
        Some("hollow") => Json(json!({ "nickname": "hollow" })).into_response(),
        Some("throttled") => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "message": "rate limit exceeded" })),
        )
            .into_response(),
        _ => faceit_error(StatusCode::NOT_FOUND, "Player not found"),
    }
}

async fn match_history(
    headers: HeaderMap,
    Path(player_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return faceit_error(StatusCode::UNAUTHORIZED, "invalid token");
    }
    if player_id != KNOWN_PLAYER_ID {
        return faceit_error(StatusCode::NOT_FOUND, "Player not found");
    }
    if params.get("limit").map(String::as_str) != Some("100") {
        return faceit_error(StatusCode::BAD_REQUEST, "unexpected limit");
    }
    Json(read_fixture("faceit_match_history.json")).into_response()
}

async fn map_stats(headers: HeaderMap, Path(player_id): Path<String>) -> impl IntoResponse {
    if !authorized(&headers) {
        return faceit_error(StatusCode::UNAUTHORIZED, "invalid token");
    }
    if player_id != KNOWN_PLAYER_ID {
        return faceit_error(StatusCode::NOT_FOUND, "Player not found");
    }
    Json(json!({
        "player_id": player_id,
        "lifetime": { "Matches": "420" },
        "segments": [
            { "label": "de_mirage", "mode": "5v5", "stats": { "Win Rate %": "56" } },
            { "label": "de_nuke", "mode": "5v5", "stats": { "Win Rate %": "48" } }
        ]
    }))
    .into_response()
}

pub fn fake_faceit() -> Router {
    Router::new()
        .route("/data/v4/players", get(players))
        .route("/data/v4/players/{player_id}/games/cs2/stats", get(match_history))
        .route("/data/v4/players/{player_id}/stats/cs2", get(map_stats))
}

async fn resolve_vanity(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    match params.get("key").map(String::as_str) {
        Some(STEAM_KEY) => {}
        Some("revoked") => return (StatusCode::FORBIDDEN, "Forbidden").into_response(),
        _ => return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response(),
    }

    let body = match params.get("vanityurl").map(String::as_str) {
        Some("s1mple") => json!({ "response": { "steamid": KNOWN_STEAM_ID, "success": 1 } }),
        Some("lurker") => json!({ "response": { "steamid": "76561198099999999", "success": 1 } }),
        Some("broken") => json!({}),
        _ => json!({ "response": { "success": 42, "message": "No match" } }),
    };
    Json(body).into_response()
}

pub fn fake_steam() -> Router {
    Router::new().route("/ISteamUser/ResolveVanityURL/v1/", get(resolve_vanity))
}

pub fn faceit_client(base: &str) -> FaceitClient {
    FaceitClient::new(&format!("{base}/data/v4"), FACEIT_KEY, Duration::from_secs(5)).unwrap()
}

pub fn steam_client(base: &str, key: &str) -> SteamClient {
    SteamClient::new(base, key, Duration::from_secs(5)).unwrap()
}
