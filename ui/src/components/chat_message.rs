//! Chat message component

use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

use crate::types::{Message, MessageRole};

/// Render a single chat message
#[component]
pub fn ChatMessage(message: Message) -> impl IntoView {
    let is_user = message.role == MessageRole::User;
    let is_system = message.role == MessageRole::System;

    if is_system {
        return view! {
            <div class="flex justify-center message-appear">
                <div class="px-4 py-2 rounded-lg text-sm bubble-system">
                    {message.content}
                </div>
            </div>
        }
        .into_any();
    }

    let mode_label = message.mode.filter(|_| !is_user).map(|m| m.label());

    view! {
        <div class=format!(
            "flex items-start gap-3 message-appear {}",
            if is_user { "flex-row-reverse" } else { "" }
        )>
            <div class=format!(
                "avatar w-8 h-8 rounded-full flex items-center justify-center text-sm font-medium shrink-0 {}",
                if is_user { "avatar-user" } else { "avatar-assistant" }
            )>
                {if is_user { "You" } else { "L" }}
            </div>

            <div class=format!(
                "flex flex-col gap-1 max-w-[80%] {}",
                if is_user { "items-end" } else { "items-start" }
            )>
                {mode_label.map(|label| view! {
                    <span class="text-xs text-[var(--text-muted)] font-medium">{label}</span>
                })}

                <div class=format!(
                    "px-4 py-3 rounded-2xl break-words {}",
                    if is_user { "bubble-user rounded-tr-sm whitespace-pre-wrap" } else { "bubble-assistant rounded-tl-sm prose" }
                )>
                    {if is_user {
                        view! { <span>{message.content}</span> }.into_any()
                    } else {
                        view! { <div inner_html=render_markdown(&message.content)></div> }.into_any()
                    }}
                </div>

                <span class="text-xs text-[var(--text-muted)] mt-1">
                    {message.timestamp.format("%H:%M").to_string()}
                </span>
            </div>
        </div>
    }
    .into_any()
}

/// Markdown to HTML for assistant replies. Raw HTML in the source is escaped.
fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_tables_and_code() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n\n`x`");
        assert!(html.contains("<table>"));
        assert!(html.contains("<code>x</code>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("<script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
