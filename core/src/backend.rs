use async_trait::async_trait;

use crate::errors::AskError;
use crate::models::{AskRequest, AskResponse};

/// The remote Q&A collaborator.
///
/// Futures are not required to be `Send`: the browser implementation runs on
/// the single-threaded wasm executor.
#[async_trait(?Send)]
pub trait QaBackend {
    /// Sends one question and waits for the outcome. Implementations perform
    /// no retries.
    async fn ask(&self, request: &AskRequest) -> Result<AskResponse, AskError>;
}
