//! Login/Register page

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use luca_core::{AuthMode, AuthSubmission, QueryKey};

use crate::api::authenticate;
use crate::components::{AuthForm, Header};
use crate::state::AppState;

/// Login/Register page.
///
/// Owns the form mode, the busy flag and the error banner; the form itself
/// only reports what was typed.
#[component]
pub fn LoginPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let mode = RwSignal::new(AuthMode::default());
    let is_loading = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let signed_in = RwSignal::new(false);

    // Redirect once signed in, or if already logged in
    Effect::new(move |_| {
        if signed_in.get() || state.current_user.with(|u| u.is_some()) {
            navigate("/chat", Default::default());
        }
    });

    let on_toggle_mode = Callback::new(move |_: ()| {
        mode.update(|m| *m = m.toggled());
        error.set(None);
    });

    let on_submit = Callback::new(move |submission: AuthSubmission| {
        if is_loading.get_untracked() {
            return;
        }
        let request = submission.into_request();

        spawn_local(async move {
            is_loading.set(true);
            error.set(None);

            let base_url = state.api_base.get_untracked();
            let result = authenticate(&base_url, &request).await;

            is_loading.set(false);

            match result {
                Ok(()) => {
                    state.queries.update(|q| {
                        q.invalidate(QueryKey::CurrentUser);
                    });
                    state.refresh_session();
                    signed_in.set(true);
                }
                Err(e) => {
                    tracing::debug!("Authentication failed: {}", e);
                    error.set(Some(e));
                }
            }
        });
    });

    view! {
        <div class="min-h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />

            <main class="auth-container flex-1">
                <div class="w-full max-w-md px-4">
                    <Show when=move || error.with(|e| e.is_some())>
                        <div class="mb-6 p-4 alert-error text-sm animate-fade-in" role="alert">
                            {move || error.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <AuthForm
                        mode=mode
                        on_toggle_mode=on_toggle_mode
                        on_submit=on_submit
                        busy=is_loading
                    />
                </div>
            </main>
        </div>
    }
}
