//! Light/dark switch

use leptos::prelude::*;
use luca_core::Theme;

use crate::state::AppState;

/// Flips the theme in app state; storage and the document class follow.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let state = expect_context::<AppState>();
    let is_dark = Signal::derive(move || state.current_theme() == Theme::Dark);

    view! {
        <button
            on:click=move |_| state.toggle_theme()
            class="btn btn-ghost p-2"
            aria-label=move || if is_dark.get() { "Switch to light theme" } else { "Switch to dark theme" }
        >
            {move || if is_dark.get() { "☀" } else { "☾" }}
        </button>
    }
}
