//! # luca-core
//!
//! Headless view models behind the Luca frontend. Every rule the components
//! follow lives here, free of any rendering or browser API, so it compiles for
//! both `wasm32-unknown-unknown` and native test targets.
//!
//! ## Modules
//!
//! - **session**: current-user identity and the fallback shown while signed out
//! - **nav**: the admin route table and exact-match active highlighting
//! - **auth_form**: sign-in / sign-up field buffers and submissions
//! - **chat_input**: message buffer with Enter / Shift+Enter handling
//! - **mode**: the six chat modes and the controlled selector
//! - **theme**: light/dark preference backed by a key-value store
//! - **query_cache**: client cache with session-scoped invalidation
//! - **api**: endpoint paths and wire types shared with the server
//!
//! ## Example
//!
//! ```rust
//! use luca_core::{ChatInput, SessionIdentity};
//!
//! let identity = SessionIdentity::from_user(None);
//! assert_eq!(identity.initials, "AD");
//!
//! let mut input = ChatInput::new();
//! input.set_text("hello");
//! let mut sent = Vec::new();
//! assert!(input.submit(|msg| sent.push(msg)));
//! assert_eq!(sent, vec!["hello".to_string()]);
//! assert!(input.text().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod api;
pub mod auth_form;
pub mod chat_input;
pub mod error;
pub mod mode;
pub mod nav;
pub mod query_cache;
pub mod session;
pub mod theme;

// Re-exports for convenience
pub use auth_form::{AuthField, AuthForm, AuthMode, AuthRequest, AuthSubmission};
pub use chat_input::{ChatInput, KeyAction, KeyPress};
pub use error::{Error, Result};
pub use mode::{ChatMode, ModeOption, ModeSelector};
pub use nav::{LogoutPlan, LogoutStep, NavItem, ADMIN_NAV};
pub use query_cache::{QueryCache, QueryKey};
pub use session::{initials, SessionIdentity, User};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemePreference, THEME_STORAGE_KEY};
