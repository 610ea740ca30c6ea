use super::{extract::ApiJson, method_not_allowed, preflight, AppState};
use crate::error::Result;
use crate::models::{PlaylistRequest, PlaylistSuggestion};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/music-suggest",
        post(suggest).options(preflight).fallback(method_not_allowed),
    )
}

async fn suggest(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<PlaylistRequest>,
) -> Result<Json<PlaylistSuggestion>> {
    let suggestion = state.playlists.resolve(&req)?;
    Ok(Json(suggestion))
}
