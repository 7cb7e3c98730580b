use async_trait::async_trait;
use tracing::{debug, warn};

use qa_chat_core::protocol::{chat_url, interpret_response};
use qa_chat_core::{AskError, AskRequest, AskResponse, QaBackend};

use crate::errors::AppError;

/// [`QaBackend`] over `reqwest`, posting to `{api_base}/chat/`.
///
/// No timeout is configured: a question runs until the backend answers or the
/// connection fails.
#[derive(Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    chat_url: String,
}

impl HttpBackend {
    /// `api_base` must be absolute; see [`crate::settings::ClientSettings`].
    pub fn new(api_base: &str) -> Result<Self, AppError> {
        let http = reqwest::Client::builder().build().map_err(AppError::HttpClient)?;
        Ok(Self::with_client(http, api_base))
    }

    pub fn with_client(http: reqwest::Client, api_base: &str) -> Self {
        Self { http, chat_url: chat_url(api_base) }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

#[async_trait(?Send)]
impl QaBackend for HttpBackend {
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AskError> {
        debug!(url = %self.chat_url, "Sending question");

        let resp = self
            .http
            .post(&self.chat_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {e}", self.chat_url);
                if e.is_builder() {
                    AskError::encode(e)
                } else {
                    AskError::transport(e)
                }
            })?;

        let status = resp.status().as_u16();
        // A body that can't be read is treated like an unparsable one.
        let body = resp.text().await.unwrap_or_else(|e| {
            warn!("Failed to read response body (status {status}): {e}");
            String::new()
        });

        interpret_response(status, &body)
    }
}
