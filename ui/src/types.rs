//! Client-side chat types

use luca_core::ChatMode;

/// Message in a conversation
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Mode the message was sent or answered in
    pub mode: Option<ChatMode>,
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageRole {
    User,
    Assistant,
    System,
}

impl Message {
    fn new(role: MessageRole, content: impl Into<String>, mode: Option<ChatMode>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: chrono::Utc::now(),
            mode,
        }
    }

    pub fn user(content: impl Into<String>, mode: ChatMode) -> Self {
        Self::new(MessageRole::User, content, Some(mode))
    }

    pub fn assistant(content: impl Into<String>, mode: ChatMode) -> Self {
        Self::new(MessageRole::Assistant, content, Some(mode))
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content, None)
    }
}

/// Conversation state
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    pub id: Option<String>,
    pub messages: Vec<Message>,
}
