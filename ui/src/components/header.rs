//! Header component

use leptos::prelude::*;
use luca_core::SessionIdentity;

use crate::components::ThemeToggle;
use crate::state::AppState;

/// Main application header
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<AppState>();
    state.load_session();

    let is_auth = Memo::new(move |_| {
        state
            .current_user
            .with(|u| SessionIdentity::from_user(u.as_ref()).is_authenticated())
    });

    view! {
        <header class="header h-16 sticky top-0 z-40">
            <div class="h-full max-w-7xl mx-auto px-4 flex items-center justify-between">
                // Logo
                <a href="/" class="logo hover:opacity-80 transition-opacity">
                    <img src="/assets/luca.svg" alt="Luca" class="logo-image" />
                    <div>
                        <h1 class="text-xl font-bold text-gradient">"Luca"</h1>
                        <p class="text-xs text-[var(--text-muted)] -mt-0.5">"Your finance co-pilot"</p>
                    </div>
                </a>

                <nav class="flex items-center gap-2">
                    <Show when=move || is_auth.get()>
                        <a href="/chat" class="btn btn-ghost">"Chat"</a>
                        <a href="/admin" class="btn btn-ghost">"Admin"</a>
                    </Show>

                    <ThemeToggle />

                    <Show
                        when=move || is_auth.get()
                        fallback=|| view! { <a href="/login" class="btn btn-primary">"Sign In"</a> }
                    >
                        <SessionBadge />
                    </Show>
                </nav>
            </div>
        </header>
    }
}

/// Avatar with initials and name of the current session.
///
/// Falls back to the placeholder admin identity while no user is known.
#[component]
pub fn SessionBadge(
    /// Also show the email under the name
    #[prop(default = false)]
    show_email: bool,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let identity =
        Memo::new(move |_| state.current_user.with(|u| SessionIdentity::from_user(u.as_ref())));

    view! {
        <div class="flex items-center gap-3">
            <div class="avatar w-9 h-9 rounded-full flex items-center justify-center text-sm font-semibold">
                {move || identity.with(|i| i.initials.clone())}
            </div>
            <div class="min-w-0">
                <div class="text-sm font-medium truncate">
                    {move || identity.with(|i| i.display_name.clone())}
                </div>
                {show_email.then(|| view! {
                    <div class="text-xs text-[var(--text-muted)] truncate">
                        {move || identity.with(|i| i.email.clone().unwrap_or_default())}
                    </div>
                })}
            </div>
        </div>
    }
}
