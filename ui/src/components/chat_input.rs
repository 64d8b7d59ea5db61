//! Chat input component

use leptos::prelude::*;
use luca_core::{ChatInput as InputBuffer, KeyAction, KeyPress};
use web_sys::HtmlTextAreaElement;

const MAX_HEIGHT_PX: i32 = 200;

/// Chat input with auto-resize textarea
///
/// Enter sends, Shift+Enter inserts a newline. The buffer is cleared right
/// after `on_submit` is called.
#[component]
pub fn ChatInput(
    /// Receives the trimmed message
    #[prop(into)]
    on_submit: Callback<String>,
    /// Whether input is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Placeholder text
    #[prop(default = "Ask about your books...")]
    placeholder: &'static str,
) -> impl IntoView {
    let buffer = RwSignal::new(InputBuffer::new());
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    Effect::new(move |_| {
        let is_disabled = disabled.get();
        buffer.update(|b| b.set_disabled(is_disabled));
    });

    let resize_textarea = move || {
        if let Some(textarea) = textarea_ref.get() {
            let el: &HtmlTextAreaElement = textarea.as_ref();
            let new_height = el.scroll_height().min(MAX_HEIGHT_PX);
            let _ = el.set_attribute(
                "style",
                &format!("height: {}px; max-height: {}px;", new_height, MAX_HEIGHT_PX),
            );
        }
    };

    let send = move || {
        let mut message = None;
        buffer.update(|b| {
            b.submit(|text| message = Some(text));
        });
        if let Some(text) = message {
            on_submit.run(text);
            resize_textarea();
        }
    };

    let on_input = move |ev: web_sys::Event| {
        buffer.update(|b| b.set_text(event_target_value(&ev)));
        resize_textarea();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = KeyPress::new(ev.key(), ev.shift_key());
        if InputBuffer::key_action(&key) == KeyAction::Submit {
            ev.prevent_default();
            send();
        }
    };

    let cannot_send = Signal::derive(move || !buffer.with(|b| b.can_submit()));

    view! {
        <div class="chat-input flex items-end gap-3 p-4 border-t border-[var(--border-default)]">
            <div class="flex-1 relative">
                <textarea
                    node_ref=textarea_ref
                    prop:value=move || buffer.with(|b| b.text().to_string())
                    on:input=on_input
                    on:keydown=on_keydown
                    placeholder=placeholder
                    disabled=move || disabled.get()
                    rows="1"
                    class="input w-full resize-none disabled:opacity-50 disabled:cursor-not-allowed"
                    style="max-height: 200px;"
                ></textarea>
            </div>

            <button
                on:click=move |_| send()
                disabled=move || cannot_send.get()
                class="btn btn-primary p-3 rounded-xl"
                aria-label="Send message"
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    class="w-5 h-5"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    <line x1="22" y1="2" x2="11" y2="13"></line>
                    <polygon points="22 2 15 22 11 13 2 9 22 2"></polygon>
                </svg>
            </button>
        </div>
    }
}
