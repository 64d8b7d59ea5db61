//! Reusable UI components

pub mod auth_form;
pub mod chat_input;
pub mod chat_message;
pub mod header;
pub mod loading;
pub mod mode_selector;
pub mod nav_shell;
pub mod theme_toggle;

pub use auth_form::AuthForm;
pub use chat_input::ChatInput;
pub use chat_message::ChatMessage;
pub use header::{Header, SessionBadge};
pub use loading::{LoadingSpinner, TypingIndicator};
pub use mode_selector::ModeSelector;
pub use nav_shell::NavShell;
pub use theme_toggle::ThemeToggle;
