mod common;

use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use serde_json::{json, Value};

use common::{dead_address, spawn_server, MockQa};
use qa_chat::proxy::{self, ProxyState};
use qa_chat::HttpBackend;
use qa_chat_core::{AskError, AskRequest, QaBackend};

struct DevServer {
    base_url: String,
    _static_dir: tempfile::TempDir,
}

async fn start_dev_server(upstream: &str) -> DevServer {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("index.html"), "<html>chat</html>").unwrap();
    std::fs::write(static_dir.path().join("app.js"), "console.log('hi')").unwrap();

    let state = ProxyState::new(reqwest::Client::new(), upstream);
    let base_url = spawn_server(proxy::router(state, static_dir.path())).await;
    DevServer { base_url, _static_dir: static_dir }
}

#[tokio::test]
async fn health_check() {
    let server = start_dev_server(&dead_address().await).await;

    let resp = reqwest::get(format!("{}/healthz", server.base_url)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn forwards_chat_requests_to_upstream() {
    let upstream = MockQa::start(StatusCode::OK, r#"{"answer": "4"}"#).await;
    let server = start_dev_server(&upstream.base_url).await;

    let resp = reqwest::Client::new()
        .post(format!("{}/api/chat/", server.base_url))
        .json(&json!({ "question": "What is 2+2?" }))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/json"
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "answer": "4" }));
    assert_eq!(upstream.received(), vec![json!({ "question": "What is 2+2?" })]);
}

#[tokio::test]
async fn relays_upstream_error_status_and_body() {
    let upstream =
        MockQa::start(StatusCode::INTERNAL_SERVER_ERROR, r#"{"detail":"model unavailable"}"#).await;
    let server = start_dev_server(&upstream.base_url).await;
    let backend = HttpBackend::new(&format!("{}/api", server.base_url)).unwrap();

    let err = backend.ask(&AskRequest::new("hi")).await.unwrap_err();
    assert_eq!(
        err,
        AskError::Status { status: 500, detail: Some("model unavailable".into()) }
    );
}

#[tokio::test]
async fn preserves_query_string() {
    let upstream = spawn_server(Router::new().route(
        "/echo",
        get(|RawQuery(query): RawQuery| async move { query.unwrap_or_default() }),
    ))
    .await;
    let server = start_dev_server(&upstream).await;

    let resp = reqwest::get(format!("{}/api/echo?model=llama3.2&x=1", server.base_url))
        .await
        .unwrap();
    assert_eq!(resp.text().await.unwrap(), "model=llama3.2&x=1");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway_with_detail() {
    let server = start_dev_server(&dead_address().await).await;
    let backend = HttpBackend::new(&format!("{}/api", server.base_url)).unwrap();

    let err = backend.ask(&AskRequest::new("hi")).await.unwrap_err();
    match err {
        AskError::Status { status, detail } => {
            assert_eq!(status, 502);
            assert!(detail.unwrap().starts_with("upstream unavailable"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn serves_static_files_with_index_fallback() {
    let server = start_dev_server(&dead_address().await).await;

    let asset = reqwest::get(format!("{}/app.js", server.base_url)).await.unwrap();
    assert_eq!(asset.status(), StatusCode::OK);
    assert_eq!(asset.text().await.unwrap(), "console.log('hi')");

    let page = reqwest::get(format!("{}/some/client/route", server.base_url))
        .await
        .unwrap();
    assert_eq!(page.text().await.unwrap(), "<html>chat</html>");
}
