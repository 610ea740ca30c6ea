use super::{extract::ApiJson, method_not_allowed, preflight, AppState};
use crate::error::Result;
use crate::models::{AssistantRequest, AssistantResponse};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/assistant",
        post(ask).options(preflight).fallback(method_not_allowed),
    )
}

async fn ask(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<AssistantRequest>,
) -> Result<Json<AssistantResponse>> {
    let response = state.assistant.answer(req).await?;
    Ok(Json(response))
}
