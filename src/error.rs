use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::any::Any;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("API rate limit exceeded.")]
    RateLimited { retry_after: String },

    #[error("{0}")]
    Misconfigured(String),

    #[error("API request failed: {0}")]
    Upstream(String),

    #[error("Endpoint not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Unexpected error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::RateLimited { ref retry_after } => {
                tracing::warn!("Upstream rate limit hit, retry after {}", retry_after);
                StatusCode::TOO_MANY_REQUESTS
            }
            AppError::Misconfigured(ref msg) => {
                tracing::error!("Service misconfigured: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Upstream(ref e) => {
                tracing::error!("Upstream error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Internal(ref e) => {
                tracing::error!("Internal error: {:?}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        if let AppError::RateLimited { retry_after } = self {
            let body = Json(json!({
                "error": "API rate limit exceeded.",
                "retry_after": retry_after,
            }));
            let mut response = (status, body).into_response();
            if let Ok(value) = HeaderValue::from_str(&retry_after) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
            return response;
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Turns a handler panic into the same JSON 500 as any other unexpected error.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(anyhow::anyhow!(detail)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Validation("Prompt required".into()), StatusCode::BAD_REQUEST),
            (AppError::NotFound, StatusCode::NOT_FOUND),
            (AppError::MethodNotAllowed, StatusCode::METHOD_NOT_ALLOWED),
            (
                AppError::RateLimited { retry_after: "60".into() },
                StatusCode::TOO_MANY_REQUESTS,
            ),
            (AppError::Misconfigured("no key".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Upstream("timeout".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_messages_carry_details() {
        assert_eq!(
            AppError::Upstream("connection refused".into()).to_string(),
            "API request failed: connection refused"
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom")).to_string(),
            "Unexpected error: boom"
        );
        assert_eq!(AppError::NotFound.to_string(), "Endpoint not found");
    }

    #[test]
    fn test_panic_becomes_unexpected_error() {
        let response = panic_response(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_rate_limit_passes_http_date_through() {
        let date = "Wed, 21 Oct 2026 07:28:00 GMT";
        let response = AppError::RateLimited { retry_after: date.into() }.into_response();
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers().get(header::RETRY_AFTER).unwrap(), date);
    }

    #[test]
    fn test_rate_limit_sets_retry_after_header() {
        let response = AppError::RateLimited { retry_after: "12".into() }.into_response();
        assert_eq!(
            response.headers().get(header::RETRY_AFTER).unwrap(),
            "12"
        );
    }
}
