#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::Value;
use tokio::net::TcpListener;

/// Serves `app` on an ephemeral localhost port and returns its base URL.
pub async fn spawn_server(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL nothing is listening on.
pub async fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// A stand-in Q&A backend: `POST /chat/` records the JSON body and answers
/// with a fixed status and body.
pub struct MockQa {
    pub base_url: String,
    pub received: Arc<Mutex<Vec<Value>>>,
}

impl MockQa {
    pub async fn start(status: StatusCode, body: &'static str) -> Self {
        let received = Arc::new(Mutex::new(Vec::new()));
        let seen = received.clone();
        let app = Router::new().route(
            "/chat/",
            post(move |Json(payload): Json<Value>| {
                let seen = seen.clone();
                async move {
                    seen.lock().unwrap().push(payload);
                    (status, [("content-type", "application/json")], body)
                }
            }),
        );
        Self { base_url: spawn_server(app).await, received }
    }

    pub fn received(&self) -> Vec<Value> {
        self.received.lock().unwrap().clone()
    }
}
