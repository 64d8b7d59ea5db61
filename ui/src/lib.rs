//! Luca web frontend
//!
//! Marketing pages, sign-in, the assistant chat and the admin shell. The rules
//! each component follows live in `luca-core`; this crate renders them and
//! wires them to the browser.

pub mod api;
pub mod components;
pub mod pages;
pub mod state;
pub mod types;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use pages::{admin::AdminPage, chat::ChatPage, home::HomePage, login::LoginPage};
use state::AppState;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Theme is read from storage once, here; the document class follows it.
    let app_state = AppState::new();
    app_state.bind_theme_class();
    provide_context(app_state);

    view! {
        <Router>
            <main class="min-h-screen bg-[var(--bg-primary)] text-[var(--text-primary)]">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/chat") view=ChatPage />
                    <Route path=path!("/admin") view=AdminPage />
                    <Route path=path!("/admin/*rest") view=AdminPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-[var(--text-muted)] mb-4">"404"</h1>
                <p class="text-xl text-[var(--text-secondary)] mb-8">"Page not found"</p>
                <a href="/" class="btn btn-primary">"Back to Luca"</a>
            </div>
        </div>
    }
}
