//! Local dev server: serves the built frontend and forwards `/api/*` to the
//! real Q&A backend, so the UI's default `/api` base works same-origin.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, Method};
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::{debug, error};

use crate::errors::AppError;

#[derive(Clone)]
pub struct ProxyState {
    http: reqwest::Client,
    upstream: Arc<str>,
}

impl ProxyState {
    pub fn new(http: reqwest::Client, upstream: &str) -> Self {
        Self { http, upstream: upstream.trim_end_matches('/').into() }
    }
}

/// Builds the dev server's router.
///
/// - `GET /healthz` answers `ok`
/// - `/api/{*path}` is forwarded to `{upstream}/{path}`
/// - everything else is served from `static_dir`, falling back to its
///   `index.html`
pub fn router(state: ProxyState, static_dir: impl AsRef<FsPath>) -> Router {
    let static_dir = static_dir.as_ref();
    let index = static_dir.join("index.html");

    // Lets a frontend served from another port (e.g. `trunk serve`) call the proxy.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/{*path}", any(forward))
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir).fallback(ServeFile::new(index)))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> &'static str {
    "ok"
}

/// Relays one request upstream, preserving method, query, content type and
/// body, and relays status, content type and body back.
async fn forward(
    State(state): State<ProxyState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let mut url = format!("{}/{path}", state.upstream);
    if let Some(query) = query {
        url.push('?');
        url.push_str(&query);
    }
    debug!(%method, %url, "Forwarding to upstream");

    let mut request = state.http.request(method, &url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type);
    }

    let upstream_resp = request.send().await.map_err(|e| {
        error!("Upstream {} unreachable: {e}", state.upstream);
        AppError::UpstreamUnavailable {
            upstream: state.upstream.to_string(),
            reason: e.to_string(),
        }
    })?;

    let status = upstream_resp.status();
    let content_type = upstream_resp.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream_resp.bytes().await.map_err(AppError::UpstreamBody)?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}
