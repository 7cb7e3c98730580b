//! HTTP-stack independent handling of the `/chat/` exchange.
//!
//! Both the browser and the native backends send the request with their own
//! client and hand the raw status and body to [`interpret_response`], so the
//! response contract lives in exactly one place.

use tracing::warn;

use crate::errors::AskError;
use crate::models::{AskResponse, ErrorBody};

/// Sub-path appended to the resolved base address.
pub const CHAT_PATH: &str = "/chat/";

pub fn chat_url(api_base: &str) -> String {
    format!("{}{CHAT_PATH}", api_base.trim_end_matches('/'))
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Maps a raw response onto the ask outcome.
///
/// - 2xx: the body is parsed as [`AskResponse`]; an unparsable body yields an
///   empty response (fallback answer), not an error.
/// - anything else: [`AskError::Status`] with the `detail`/`error` field when
///   the body parses, or no detail at all when it doesn't.
pub fn interpret_response(status: u16, body: &str) -> Result<AskResponse, AskError> {
    if is_success(status) {
        return Ok(serde_json::from_str::<AskResponse>(body).unwrap_or_else(|e| {
            warn!("Unparsable answer body (status {status}): {e}");
            AskResponse::default()
        }));
    }

    let detail = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message());
    Err(AskError::Status { status, detail })
}
