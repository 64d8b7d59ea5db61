//! Chat mode selector

use leptos::prelude::*;
use luca_core::{ModeOption, ModeSelector as Modes};

/// Row of the six chat modes.
///
/// Holds no state: the caller owns `active` and decides what to do with the
/// identifier passed to `on_change`.
#[component]
pub fn ModeSelector(
    /// Identifier of the active mode
    #[prop(into)]
    active: Signal<String>,
    /// Called with the clicked mode's identifier
    #[prop(into)]
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="mode-selector flex flex-wrap gap-2" role="radiogroup" aria-label="Chat mode">
            {move || {
                Modes::options(&active.get())
                    .into_iter()
                    .map(|option| view! { <ModeButton option=option on_change=on_change /> })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}

#[component]
fn ModeButton(option: ModeOption, on_change: Callback<String>) -> impl IntoView {
    let mode = option.mode;
    let on_click = move |_| Modes::select(mode.id(), |id| on_change.run(id.to_string()));

    view! {
        <button
            on:click=on_click
            role="radio"
            aria-checked=option.is_active.to_string()
            class=format!(
                "mode-chip flex items-center gap-1.5 px-3 py-1.5 rounded-full text-sm transition-colors {}",
                if option.is_active { "mode-chip-active" } else { "" }
            )
        >
            <span>{mode.icon()}</span>
            <span>{mode.label()}</span>
        </button>
    }
}
