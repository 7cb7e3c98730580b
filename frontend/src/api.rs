use async_trait::async_trait;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;

use qa_chat_core::config::resolve_api_base;
use qa_chat_core::protocol::{chat_url, interpret_response};
use qa_chat_core::{AskError, AskRequest, AskResponse, QaBackend};

/// Base address baked in at build time (`BACKEND_API_URL=... trunk build`).
const BUILD_TIME_API_URL: Option<&str> = option_env!("BACKEND_API_URL");

/// Reads `window.BACKEND_API_URL`, injected by the hosting page.
fn runtime_api_url() -> Option<String> {
    let window = web_sys::window()?;
    js_sys::Reflect::get(&window, &JsValue::from_str("BACKEND_API_URL"))
        .ok()?
        .as_string()
}

/// Base address of the Q&A backend, resolved once at startup.
pub fn api_base() -> String {
    resolve_api_base(runtime_api_url().as_deref(), BUILD_TIME_API_URL)
}

/// [`QaBackend`] over the browser's `fetch`.
#[derive(Clone, Debug)]
pub struct GlooBackend {
    chat_url: String,
}

impl GlooBackend {
    pub fn new(api_base: &str) -> Self {
        Self { chat_url: chat_url(api_base) }
    }

    pub fn from_page() -> Self {
        let base = api_base();
        log::info!("Q&A backend at {base}");
        Self::new(&base)
    }
}

#[async_trait(?Send)]
impl QaBackend for GlooBackend {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AskError> {
        let resp = Request::post(&self.chat_url)
            .json(request)
            .map_err(|e| AskError::encode(e))?
            .send()
            .await
            .map_err(|e| AskError::transport(e))?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_else(|e| {
            log::warn!("Failed to read response body (status {status}): {e}");
            String::new()
        });

        interpret_response(status, &body)
    }
}
