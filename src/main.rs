use tokio::net::TcpListener;
use tracing::info;

use qa_chat::proxy::{self, ProxyState};
use qa_chat::settings::ServerSettings;
use qa_chat::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    qa_chat::telemetry::init("qa_chat=debug,tower_http=debug");

    let settings = ServerSettings::from_env()?;

    // ── Upstream client ───────────────────────────────────────────────────────
    let http = reqwest::Client::builder().build().map_err(AppError::HttpClient)?;
    let state = ProxyState::new(http, &settings.upstream_url);
    info!(
        "Proxying /api to {} and serving {}",
        settings.upstream_url,
        settings.static_dir.display()
    );

    // ── Router ────────────────────────────────────────────────────────────────
    let app = proxy::router(state, &settings.static_dir);

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", settings.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
