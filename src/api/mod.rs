pub mod assistant;
pub mod extract;
pub mod music;
pub mod quotes;
pub mod spotify;

use crate::config::Config;
use crate::error::{self, AppError};
use crate::services::{AssistantClient, PlaylistCatalog, QuoteBook};
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

pub struct AppState {
    pub assistant: AssistantClient,
    pub playlists: PlaylistCatalog,
    pub quotes: QuoteBook,
}

/// The served application: routes plus panic catching, tracing,
/// compression and CORS.
pub fn app(state: Arc<AppState>, config: &Config) -> Router {
    router(state)
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_layer(config))
        .layer(middleware::from_fn(preflight_body))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origin = if config.allows_any_origin() {
        AllowOrigin::from(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
}

/// `CorsLayer` answers preflights itself with an empty body; clients of this
/// API expect the same `{}` a bare OPTIONS gets.
async fn preflight_body(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let response = next.run(request).await;

    if !is_options
        || response.status() != StatusCode::OK
        || response.headers().contains_key(header::CONTENT_TYPE)
    {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts
        .headers
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Response::from_parts(parts, Body::from("{}"))
}

/// All routes plus the JSON 404 fallback, without cross-cutting layers
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(status).fallback(method_not_allowed))
        .merge(assistant::routes())
        .merge(music::routes())
        .merge(quotes::routes())
        .merge(spotify::routes())
        .fallback(not_found)
        .with_state(state)
}

async fn status() -> Json<Value> {
    Json(json!({
        "status": "running",
        "message": "AI Study Planner Backend (HuggingFace Space)",
    }))
}

/// Bare OPTIONS reply on the API endpoints
pub(crate) async fn preflight() -> Json<Value> {
    Json(json!({}))
}

pub(crate) async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

async fn not_found() -> AppError {
    AppError::NotFound
}
