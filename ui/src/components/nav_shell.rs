//! Admin navigation shell

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use luca_core::{NavItem, ADMIN_NAV};

use crate::components::SessionBadge;
use crate::state::AppState;

/// Sidebar with the admin routes, session identity and logout
#[component]
pub fn NavShell(
    /// Whether sidebar is open (mobile)
    is_open: RwSignal<bool>,
) -> impl IntoView {
    let state = expect_context::<AppState>();
    let pathname = use_location().pathname;

    state.load_session();

    view! {
        // Overlay for mobile
        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 backdrop-blur-sm z-30 lg:hidden animate-fade-in"
                on:click=move |_| is_open.set(false)
            ></div>
        </Show>

        <aside class=move || format!(
            "sidebar fixed lg:relative inset-y-0 left-0 z-40 w-64 flex flex-col transform transition-transform duration-300 lg:translate-x-0 {}",
            if is_open.get() { "translate-x-0" } else { "-translate-x-full" }
        )>
            <div class="p-4 border-b border-[var(--border-default)]">
                <a href="/" class="text-lg font-bold text-gradient">"Luca Admin"</a>
            </div>

            <nav class="flex-1 overflow-y-auto p-4 space-y-1">
                {ADMIN_NAV
                    .into_iter()
                    .map(|item| view! {
                        <NavLink
                            item=item
                            is_active=Signal::derive(move || pathname.with(|p| item.is_active(p)))
                        />
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="p-4 border-t border-[var(--border-default)] space-y-3">
                <SessionBadge show_email=true />
                <button on:click=move |_| state.logout() class="btn btn-ghost w-full">
                    "Log out"
                </button>
            </div>
        </aside>
    }
}

#[component]
fn NavLink(item: NavItem, is_active: Signal<bool>) -> impl IntoView {
    view! {
        <a
            href=item.href
            aria-current=move || is_active.get().then_some("page")
            class=move || format!(
                "sidebar-item block w-full transition-all duration-150 {}",
                if is_active.get() { "sidebar-item-active" } else { "" }
            )
        >
            {item.label}
        </a>
    }
}
