//! Admin dashboard shell

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;
use luca_core::nav::active_item;

use crate::components::{NavShell, ThemeToggle};

/// Admin layout: sidebar plus the section matching the current route
#[component]
pub fn AdminPage() -> impl IntoView {
    let sidebar_open = RwSignal::new(false);
    let pathname = use_location().pathname;

    let section = Memo::new(move |_| pathname.with(|p| active_item(p).map(|item| item.label)));
    let heading = move || section.get().unwrap_or("Not found");

    // Close the mobile sidebar after navigating
    Effect::new(move |_| {
        pathname.track();
        sidebar_open.set(false);
    });

    view! {
        <Title text=move || format!("{} · Luca Admin", heading()) />

        <div class="h-screen flex overflow-hidden bg-[var(--bg-primary)]">
            <NavShell is_open=sidebar_open />

            <div class="flex-1 flex flex-col min-w-0">
                <div class="h-14 px-4 flex items-center justify-between border-b border-[var(--border-default)] glass">
                    <button
                        on:click=move |_| sidebar_open.update(|v| *v = !*v)
                        class="lg:hidden btn btn-ghost p-2"
                        aria-label="Toggle navigation"
                    >
                        <svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16" />
                        </svg>
                    </button>
                    <h1 class="text-lg font-semibold">{heading}</h1>
                    <ThemeToggle />
                </div>

                <main class="flex-1 overflow-y-auto p-6">
                    <Show
                        when=move || section.get().is_some()
                        fallback=|| view! {
                            <div class="empty-state">
                                <p class="empty-state-description">"This section does not exist."</p>
                                <a href="/admin" class="btn btn-primary">"Back to dashboard"</a>
                            </div>
                        }
                    >
                        <div class="card p-6">
                            <h2 class="text-xl font-semibold mb-2">{heading}</h2>
                            <p class="text-[var(--text-secondary)]">
                                {move || format!("{} will appear here.", heading())}
                            </p>
                        </div>
                    </Show>
                </main>
            </div>
        </div>
    }
}
