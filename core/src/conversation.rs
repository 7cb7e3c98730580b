use tracing::{debug, error, warn};

use crate::backend::QaBackend;
use crate::errors::AskError;
use crate::models::{AskRequest, AskResponse, Message};

/// Seeded assistant message every conversation starts with.
pub const GREETING: &str = "Hi! Ask me anything and I will try to help.";

/// Appended when the backend succeeds without an answer.
pub const FALLBACK_ANSWER: &str = "Sorry, I could not find an answer.";

/// Appended when a submission fails.
pub const ERROR_PLACEHOLDER: &str = "⚠️ There was an error fetching the answer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// The conversation a single UI session works on.
///
/// At most one submission is in flight at a time: [`begin_submit`] refuses to
/// start while `pending`, and every [`complete`] appends exactly one assistant
/// message and clears `pending`.
///
/// [`begin_submit`]: ConversationState::begin_submit
/// [`complete`]: ConversationState::complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationState {
    messages: Vec<Message>,
    draft: String,
    pending: bool,
    last_error: Option<String>,
    model: Option<String>,
    system_prompt: Option<String>,
}

impl Default for ConversationState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationState {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::assistant(GREETING)],
            draft: String::new(),
            pending: false,
            last_error: None,
            model: None,
            system_prompt: None,
        }
    }

    /// Model override sent with every question.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// System prompt override sent with every question.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        if self.pending {
            Phase::Submitting
        } else {
            Phase::Idle
        }
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.draft.trim().is_empty()
    }

    // ── Commands ──────────────────────────────────────────────────────────────

    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Starts a submission and returns the request to send.
    ///
    /// Returns `None` without touching any state when the draft is blank or a
    /// submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<AskRequest> {
        if self.pending {
            debug!("Submission rejected: a request is already in flight");
            return None;
        }
        let question = self.draft.trim();
        if question.is_empty() {
            return None;
        }
        let question = question.to_string();

        self.last_error = None;
        self.messages.push(Message::user(question.clone()));
        self.draft.clear();
        self.pending = true;

        Some(AskRequest {
            question,
            model: self.model.clone(),
            system_prompt: self.system_prompt.clone(),
        })
    }

    /// Finishes the in-flight submission with the backend's outcome.
    pub fn complete(&mut self, outcome: Result<AskResponse, AskError>) {
        if !self.pending {
            warn!("Ignoring ask outcome with no submission in flight");
            return;
        }

        let reply = match outcome {
            Ok(response) => response.answer.unwrap_or_else(|| FALLBACK_ANSWER.to_string()),
            Err(e) => {
                error!("Ask request failed: {e}");
                self.last_error = Some(e.banner());
                ERROR_PLACEHOLDER.to_string()
            }
        };
        self.messages.push(Message::assistant(reply));
        self.pending = false;
    }

    /// Runs one full submission against `backend`.
    ///
    /// Returns `false` if the preconditions rejected it and nothing was sent.
    pub async fn submit<B>(&mut self, backend: &B) -> bool
    where
        B: QaBackend + ?Sized,
    {
        let Some(request) = self.begin_submit() else {
            return false;
        };
        let outcome = backend.ask(&request).await;
        self.complete(outcome);
        true
    }
}
