//! Chat page - main conversation interface

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use luca_core::ChatMode;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::api::send_chat;
use crate::components::{ChatInput, ChatMessage, Header, ModeSelector, TypingIndicator};
use crate::state::AppState;
use crate::types::{Conversation, Message};

/// Main chat page
#[component]
pub fn ChatPage() -> impl IntoView {
    let state = expect_context::<AppState>();
    let navigate = use_navigate();

    let conversation = RwSignal::new(Conversation::default());
    let active_mode = RwSignal::new(ChatMode::default().id().to_string());
    let is_sending = RwSignal::new(false);
    let messages_end_ref = NodeRef::<leptos::html::Div>::new();

    // Unauthenticated visitors go to the login page once the session query settles
    Effect::new(move |_| {
        let checked = state.queries.with(|q| q.contains(luca_core::QueryKey::CurrentUser));
        if checked && state.current_user.with(|u| u.is_none()) {
            navigate("/login", Default::default());
        }
    });

    let scroll_to_bottom = move || {
        if let Some(el) = messages_end_ref.get() {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&options);
        }
    };

    let on_mode_change = Callback::new(move |id: String| active_mode.set(id));

    let on_submit = Callback::new(move |text: String| {
        if is_sending.get_untracked() {
            return;
        }

        let mode = active_mode.with_untracked(|id| id.parse::<ChatMode>().unwrap_or_default());
        conversation.update(|c| c.messages.push(Message::user(text.clone(), mode)));
        is_sending.set(true);
        scroll_to_bottom();

        spawn_local(async move {
            let base_url = state.api_base.get_untracked();
            let conversation_id = conversation.with_untracked(|c| c.id.clone());

            match send_chat(&base_url, &text, mode, conversation_id).await {
                Ok(reply) => conversation.update(|c| {
                    if reply.conversation_id.is_some() {
                        c.id = reply.conversation_id;
                    }
                    c.messages.push(Message::assistant(reply.response, mode));
                }),
                Err(e) => {
                    tracing::warn!("Chat request failed: {}", e);
                    conversation.update(|c| c.messages.push(Message::system(format!("Error: {}", e))));
                }
            }

            is_sending.set(false);
            scroll_to_bottom();
        });
    });

    view! {
        <div class="h-screen flex flex-col bg-[var(--bg-primary)]">
            <Header />

            <main class="flex-1 flex flex-col min-w-0 max-w-4xl w-full mx-auto">
                <div class="px-4 py-3 flex items-center justify-between gap-4 border-b border-[var(--border-default)]">
                    <ModeSelector active=active_mode on_change=on_mode_change />

                    <div class="flex items-center gap-2 shrink-0">
                        <div class=move || format!(
                            "w-2 h-2 rounded-full {}",
                            if is_sending.get() { "status-busy animate-pulse" } else { "status-ready" }
                        )></div>
                        <span class="text-xs text-[var(--text-muted)]">
                            {move || if is_sending.get() { "Thinking..." } else { "Ready" }}
                        </span>
                    </div>
                </div>

                <div class="flex-1 overflow-y-auto px-4 py-6 space-y-6">
                    <Show
                        when=move || conversation.with(|c| !c.messages.is_empty())
                        fallback=move || view! { <EmptyState active_mode=active_mode /> }
                    >
                        <For
                            each=move || conversation.get().messages
                            key=|msg| msg.id.clone()
                            children=|msg| view! { <ChatMessage message=msg /> }
                        />
                    </Show>

                    <Show when=move || is_sending.get()>
                        <TypingIndicator />
                    </Show>

                    // Scroll anchor
                    <div node_ref=messages_end_ref></div>
                </div>

                <ChatInput
                    on_submit=on_submit
                    disabled=is_sending
                    placeholder="Ask about your books... (Shift+Enter for new line)"
                />
            </main>
        </div>
    }
}

/// Shown before the first message
#[component]
fn EmptyState(active_mode: RwSignal<String>) -> impl IntoView {
    let mode = Memo::new(move |_| active_mode.with(|id| id.parse::<ChatMode>().unwrap_or_default()));

    view! {
        <div class="empty-state h-full">
            <img src="/assets/luca.svg" alt="Luca" class="empty-state-icon" />
            <h2 class="empty-state-title text-gradient">"How can I help you today?"</h2>
            <p class="empty-state-description">
                {move || format!("{} {} mode", mode.get().icon(), mode.get().label())}
            </p>
        </div>
    }
}
