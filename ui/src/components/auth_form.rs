//! Sign-in / sign-up form card

use leptos::prelude::*;
use luca_core::{AuthField, AuthForm as FormBuffers, AuthMode, AuthSubmission};

use crate::components::LoadingSpinner;

/// Credential form.
///
/// The caller owns the mode and decides what a submission means; the form
/// only prevents the native submit and hands over the field values. Fields
/// are never cleared here.
#[component]
pub fn AuthForm(
    /// Login or register, owned by the caller
    #[prop(into)]
    mode: Signal<AuthMode>,
    /// Called when the user asks to switch modes
    #[prop(into)]
    on_toggle_mode: Callback<()>,
    /// Receives the field values on submit
    #[prop(into)]
    on_submit: Callback<AuthSubmission>,
    /// Disables the submit button while the caller is busy
    #[prop(into, default = Signal::stored(false))]
    busy: Signal<bool>,
) -> impl IntoView {
    // Field buffers only; visibility and the submitted mode always come from `mode`.
    let form = RwSignal::new(FormBuffers::new(mode.get_untracked()));

    let is_register = Signal::derive(move || mode.get() == AuthMode::Register);
    let name_visible = Signal::derive(move || mode.get().shows(AuthField::Name));

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = mode.get_untracked();
        on_submit.run(form.with_untracked(|f| f.submit_as(current)));
    };

    view! {
        <div class="auth-card">
            <div class="auth-header">
                <img src="/assets/luca.svg" alt="Luca" class="auth-logo" />
                <h1 class="auth-title text-gradient">{move || mode.get().title()}</h1>
                <p class="auth-subtitle">
                    {move || if is_register.get() {
                        "Sign up to start working with Luca"
                    } else {
                        "Sign in to continue"
                    }}
                </p>
            </div>

            <form on:submit=submit class="auth-form">
                <Show when=move || name_visible.get()>
                    <div class="auth-input-group animate-fade-in-down">
                        <label class="auth-label">"Name"</label>
                        <input
                            type="text"
                            prop:value=move || form.with(|f| f.name().to_string())
                            on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
                            placeholder="Your name"
                            required=move || name_visible.get()
                            class="input"
                        />
                    </div>
                </Show>

                <div class="auth-input-group">
                    <label class="auth-label">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email().to_string())
                        on:input=move |ev| form.update(|f| f.set_email(event_target_value(&ev)))
                        placeholder="you@company.com"
                        required=true
                        class="input"
                    />
                </div>

                <div class="auth-input-group">
                    <label class="auth-label">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || form.with(|f| f.password().to_string())
                        on:input=move |ev| form.update(|f| f.set_password(event_target_value(&ev)))
                        placeholder="••••••••"
                        required=true
                        class="input"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || busy.get()
                    class="btn btn-primary w-full py-3"
                >
                    <Show when=move || busy.get()>
                        <LoadingSpinner />
                    </Show>
                    {move || mode.get().submit_label()}
                </button>
            </form>

            <div class="auth-footer">
                {move || if is_register.get() {
                    "Already have an account? "
                } else {
                    "Don't have an account? "
                }}
                <button type="button" on:click=move |_| on_toggle_mode.run(()) class="auth-link">
                    {move || if is_register.get() { "Sign in" } else { "Sign up" }}
                </button>
            </div>
        </div>
    }
}
