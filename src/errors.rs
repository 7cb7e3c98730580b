use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors of the native binaries and the dev server.
#[derive(Debug, Error)]
pub enum AppError {
    // ── Configuration errors ─────────────────────────────────────────────────
    #[error("Invalid value '{value}' for {name}: {reason}")]
    InvalidSetting { name: &'static str, value: String, reason: String },

    // ── HTTP client errors ───────────────────────────────────────────────────
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    // ── Proxy errors ─────────────────────────────────────────────────────────
    #[error("upstream unavailable: {reason}")]
    UpstreamUnavailable { upstream: String, reason: String },

    #[error("upstream response unreadable: {0}")]
    UpstreamBody(#[source] reqwest::Error),
}

impl AppError {
    pub fn invalid_setting(
        name: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        AppError::InvalidSetting { name, value: value.into(), reason: reason.into() }
    }

    pub fn is_upstream(&self) -> bool {
        matches!(self, AppError::UpstreamUnavailable { .. } | AppError::UpstreamBody(_))
    }
}

/// Rendered as `{"detail": "..."}` so the chat client's diagnostic picks the
/// reason up like any other backend error.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_upstream() {
            StatusCode::BAD_GATEWAY
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
