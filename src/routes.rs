use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::client::{FaceitClient, SteamClient};
use crate::error::LookupError;
use crate::lookup::PlayerLookup;

pub type FaceitLookup = PlayerLookup<FaceitClient, FaceitClient, SteamClient>;

#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<FaceitLookup>,
}

impl AppState {
    pub fn new(faceit: FaceitClient, steam: SteamClient) -> Self {
        Self {
            lookup: Arc::new(PlayerLookup::new(faceit.clone(), faceit, steam)),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/faceit/player", get(player_handler))
        .route("/faceit/stats/{player_id}", get(stats_handler))
        .route("/faceit/games/{player_id}", get(games_handler))
        .route("/faceit/mapstats/{player_id}", get(map_stats_handler))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

pub fn status_for(e: &LookupError) -> StatusCode {
    match e {
        LookupError::InvalidInput(_)
        | LookupError::InvalidFormat(_)
        | LookupError::ResolutionFailed(_) => StatusCode::BAD_REQUEST,
        LookupError::NotFound(_) => StatusCode::NOT_FOUND,
        LookupError::AuthError(_) | LookupError::Http(_) | LookupError::Json(_) => {
            StatusCode::BAD_GATEWAY
        }
        LookupError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        LookupError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        LookupError::MissingConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(e: LookupError) -> axum::response::Response {
    (status_for(&e), Json(json!({ "error": e.to_string() }))).into_response()
}

#[derive(Deserialize)]
struct PlayerQuery {
    q: Option<String>,
}

async fn player_handler(
    State(state): State<AppState>,
    Query(params): Query<PlayerQuery>,
) -> impl IntoResponse {
    let query = params.q.unwrap_or_default();
    match state.lookup.find_player(&query).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn stats_handler(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> impl IntoResponse {
    match state.lookup.aggregated_stats(&player_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn games_handler(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> impl IntoResponse {
    match state.lookup.match_history(&player_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}

async fn map_stats_handler(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> impl IntoResponse {
    match state.lookup.map_stats(&player_id).await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(e) => error_response(e),
    }
}
