//! Endpoint paths and wire types of the Luca API server.

use serde::{Deserialize, Serialize};

use crate::mode::ChatMode;

/// `GET`: the signed-in user.
pub const CURRENT_USER_PATH: &str = "/api/auth/user";
/// `POST`: end the session.
pub const LOGOUT_PATH: &str = "/api/auth/logout";
/// `POST`: sign in.
pub const LOGIN_PATH: &str = "/api/auth/login";
/// `POST`: create an account.
pub const REGISTER_PATH: &str = "/api/auth/register";
/// `POST`: send a chat message.
pub const CHAT_PATH: &str = "/api/chat";

/// Join an API base URL and an endpoint path.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    /// The user's message.
    pub message: String,
    /// Selected chat mode.
    pub mode: ChatMode,
    /// Conversation to continue, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
}

/// Reply of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChatResponse {
    /// Assistant reply, markdown.
    pub response: String,
    /// Conversation the reply belongs to.
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Error body returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiError {
    /// Human-readable message.
    pub error: String,
    /// Optional extra detail.
    #[serde(default)]
    pub details: Option<String>,
}
