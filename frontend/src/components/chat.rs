use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

use qa_chat_core::Message;

use crate::state::AppState;

/// Main chat area with message log, error banner and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let list_end = NodeRef::<Div>::new();

    let is_pending = move || state.conversation.with(|c| c.is_pending());

    // Scroll to the newest message, and to the indicator while thinking
    Effect::new(move |_| {
        state.conversation.with(|c| (c.messages().len(), c.is_pending()));
        if let Some(el) = list_end.get() {
            el.scroll_into_view();
        }
    });

    view! {
        <main class="container">
            <h1 class="title">"Conversational Q&A"</h1>
            <p class="description">"Ask a question and the assistant will reply."</p>

            // Messages
            <div
                class="message-log"
                role="log"
                aria-live="polite"
                aria-busy=move || if is_pending() { "true" } else { "false" }
            >
                // Position is a message's only identity
                <For
                    each=move || {
                        state.conversation.with(|c| {
                            c.messages().iter().cloned().enumerate().collect::<Vec<_>>()
                        })
                    }
                    key=|(idx, _)| *idx
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>

                <Show when=is_pending>
                    <div class="thinking">
                        <span class="loader" aria-hidden="true">"⏳"</span>
                        <span>"Thinking…"</span>
                    </div>
                </Show>
                <div node_ref=list_end></div>
            </div>

            // Error banner, cleared when the next submission starts
            {move || {
                state.conversation.with(|c| c.last_error().map(str::to_string)).map(|err| {
                    view! { <div class="error-banner" role="alert">{err}</div> }
                })
            }}

            <ChatInput />
        </main>
    }
}

/// A single chat message bubble.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let (css_class, label, aria_label) = if message.is_user() {
        ("message user", "You", "User message")
    } else {
        ("message assistant", "🤖 Assistant", "Assistant message")
    };

    view! {
        <div class=css_class aria-label=aria_label>
            <strong class="role-label">{label}</strong>
            <span>{message.content}</span>
        </div>
    }
}

/// Question input and send button. Enter submits the form.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();

    let is_sending = move || state.conversation.with(|c| c.is_pending());
    let can_submit = move || state.conversation.with(|c| c.can_submit());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    view! {
        <form class="input-row" on:submit=on_submit>
            <input
                type="text"
                placeholder="Type your question..."
                aria-label="Question input"
                prop:value=move || state.conversation.with(|c| c.draft().to_string())
                on:input=move |ev| state.update_draft(event_target_value(&ev))
                disabled=is_sending
            />
            <button
                type="submit"
                class="btn"
                aria-label="Send question"
                disabled=move || !can_submit()
            >
                {move || if is_sending() { "Sending…" } else { "Send" }}
            </button>
        </form>
    }
}
