//! API client for communicating with the Luca server
//!
//! The session lives in a cookie, so every request is sent with credentials.

use gloo_net::http::{Request, RequestBuilder, Response};
use luca_core::api::{
    endpoint, ApiError, ChatRequest, ChatResponse, CHAT_PATH, CURRENT_USER_PATH,
};
use luca_core::{AuthRequest, ChatMode, User};
use web_sys::RequestCredentials;

fn with_credentials(req: RequestBuilder) -> RequestBuilder {
    req.credentials(RequestCredentials::Include)
}

async fn error_message(resp: Response) -> String {
    let status = resp.status();
    match resp.json::<ApiError>().await {
        Ok(err) => err.error,
        Err(_) => format!("Request failed with status {}", status),
    }
}

/// POST a JSON body, returning the raw response when it is 2xx
async fn post_json<T: serde::Serialize>(url: &str, body: &T) -> Result<Response, String> {
    let req = with_credentials(Request::post(url))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?;

    let resp = req
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    Ok(resp)
}

/// The signed-in user, or `None` for any failure.
///
/// Network errors, non-2xx statuses and a `null` body all read as signed out.
pub async fn fetch_current_user(base_url: &str) -> Option<User> {
    let url = endpoint(base_url, CURRENT_USER_PATH);
    let resp = match with_credentials(Request::get(&url)).send().await {
        Ok(resp) => resp,
        Err(e) => {
            tracing::debug!("Session request failed: {}", e);
            return None;
        }
    };

    if !resp.ok() {
        tracing::debug!("No session (status {})", resp.status());
        return None;
    }

    match resp.json::<Option<User>>().await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Unreadable session response: {}", e);
            None
        }
    }
}

/// End the session by posting to `path`. The response body is not examined.
pub async fn logout(base_url: &str, path: &str) -> Result<(), String> {
    let url = endpoint(base_url, path);
    let resp = with_credentials(Request::post(&url))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(format!("Logout failed with status {}", resp.status()))
    }
}

/// Sign in or register, depending on the request variant
pub async fn authenticate(base_url: &str, request: &AuthRequest) -> Result<(), String> {
    let url = endpoint(base_url, request.path());
    post_json(&url, request).await.map(|_| ())
}

/// Send a chat message
pub async fn send_chat(
    base_url: &str,
    message: &str,
    mode: ChatMode,
    conversation_id: Option<String>,
) -> Result<ChatResponse, String> {
    let url = endpoint(base_url, CHAT_PATH);
    let body = ChatRequest {
        message: message.to_string(),
        mode,
        conversation_id,
    };
    post_json(&url, &body)
        .await?
        .json::<ChatResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
