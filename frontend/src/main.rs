mod api;
mod components;
mod state;

use leptos::mount::mount_to_body;
use leptos::prelude::*;

use api::GlooBackend;
use components::chat::ChatArea;
use components::theme_toggle::ThemeToggle;
use state::AppState;

/// Root application component.
#[component]
fn App() -> impl IntoView {
    AppState::provide(GlooBackend::from_page());

    view! {
        <div class="App">
            <header class="App-header">
                <ThemeToggle />
                <ChatArea />
            </header>
        </div>
    }
}

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Failed to init logger");
    mount_to_body(App);
}
