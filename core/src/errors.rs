use thiserror::Error;

/// Banner text shown when no response was received.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Failure of a single ask round-trip.
///
/// `Display` is the diagnostic used for logging; [`AskError::banner`] is the
/// text surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AskError {
    /// No response: network unreachable, connection refused, request aborted.
    #[error("Network error: {reason}")]
    Transport { reason: String },

    /// The backend answered with a non-success status.
    #[error("Request failed ({status}).{suffix}", suffix = detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },

    /// The request body could not be encoded.
    #[error("Serialize error: {reason}")]
    Encode { reason: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" {d}")).unwrap_or_default()
}

impl AskError {
    pub fn transport(reason: impl ToString) -> Self {
        AskError::Transport { reason: reason.to_string() }
    }

    pub fn encode(reason: impl ToString) -> Self {
        AskError::Encode { reason: reason.to_string() }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            AskError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text for the error banner. Status failures carry the code and any
    /// server detail; everything else gets the generic message.
    pub fn banner(&self) -> String {
        match self {
            AskError::Status { .. } => self.to_string(),
            AskError::Transport { .. } | AskError::Encode { .. } => GENERIC_FAILURE.to_string(),
        }
    }
}
