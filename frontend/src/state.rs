use leptos::prelude::*;
use leptos::task::spawn_local;

use qa_chat_core::{ConversationState, QaBackend, Theme};

use crate::api::GlooBackend;

/// Shared application state, provided via Leptos context.
#[derive(Clone, Copy)]
pub struct AppState {
    pub conversation: RwSignal<ConversationState>,
    pub theme: RwSignal<Theme>,
    backend: StoredValue<GlooBackend>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide(backend: GlooBackend) -> Self {
        let state = Self {
            conversation: RwSignal::new(ConversationState::new()),
            theme: RwSignal::new(Theme::default()),
            backend: StoredValue::new(backend),
        };
        provide_context(state);
        state
    }

    pub fn update_draft(&self, text: String) {
        self.conversation.update(|c| c.update_draft(text));
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggle());
    }

    /// Submit the current draft. The user message appears immediately; the
    /// reply is appended when the request settles.
    pub fn submit(&self) {
        let Some(request) = self.conversation.try_update(|c| c.begin_submit()).flatten() else {
            return;
        };

        let conversation = self.conversation;
        let backend = self.backend.get_value();
        spawn_local(async move {
            let outcome = backend.ask(&request).await;
            conversation.update(|c| c.complete(outcome));
        });
    }
}
