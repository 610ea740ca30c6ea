use super::{method_not_allowed, AppState};
use axum::{
    extract::OriginalUri,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::sync::Arc;

pub const SPOTIFY_BASE_URL: &str = "https://open.spotify.com";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/spotify/*path",
        get(open_spotify).fallback(method_not_allowed),
    )
}

/// Build the redirect target from the raw request path, keeping its
/// percent-encoding and any query string as sent.
pub fn spotify_location(path_and_query: &axum::http::Uri) -> String {
    let path = path_and_query
        .path()
        .strip_prefix("/spotify/")
        .unwrap_or_default();

    match path_and_query.query() {
        Some(query) => format!("{}/{}?{}", SPOTIFY_BASE_URL, path, query),
        None => format!("{}/{}", SPOTIFY_BASE_URL, path),
    }
}

async fn open_spotify(OriginalUri(uri): OriginalUri) -> Response {
    let location = spotify_location(&uri);
    tracing::debug!("Redirecting to {}", location);

    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
