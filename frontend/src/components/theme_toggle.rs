use leptos::prelude::*;

use crate::state::AppState;

/// Light/dark switch. Mirrors the current theme onto `<html data-theme>`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<AppState>();

    Effect::new(move |_| {
        let theme = state.theme.get();
        if let Some(root) = document().document_element() {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                log::warn!("Failed to apply theme: {e:?}");
            }
        }
    });

    view! {
        <button
            class="theme-toggle"
            on:click=move |_| state.toggle_theme()
            aria-label=move || format!("Switch to {} mode", state.theme.get().toggle().as_str())
        >
            {move || state.theme.get().toggle_label()}
        </button>
    }
}
