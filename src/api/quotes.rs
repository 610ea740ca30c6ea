use super::{method_not_allowed, preflight, AppState};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct QuoteResponse {
    quote: &'static str,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/quote",
        get(random_quote).options(preflight).fallback(method_not_allowed),
    )
}

async fn random_quote(State(state): State<Arc<AppState>>) -> Json<QuoteResponse> {
    Json(QuoteResponse {
        quote: state.quotes.random(),
    })
}
