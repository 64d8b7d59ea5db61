//! Global application state

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos::task::spawn_local;
use luca_core::{
    Error as CoreError, LogoutPlan, LogoutStep, PreferenceStore, QueryCache, QueryKey, Theme,
    ThemePreference, User,
};

use crate::api;

/// `localStorage` holding raw string values.
///
/// Values are stored verbatim (`dark`, not `"dark"`), so this goes through the
/// raw `web_sys::Storage` rather than gloo's JSON layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> luca_core::Result<Option<String>> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| CoreError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> luca_core::Result<()> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| CoreError::Storage(format!("{:?}", e)))
    }
}

/// Global application state
#[derive(Clone, Copy)]
pub struct AppState {
    /// Theme preference, loaded from storage at startup
    pub theme: RwSignal<ThemePreference>,
    /// Signed-in user; `None` while loading, signed out, or on fetch failure
    pub current_user: RwSignal<Option<User>>,
    /// Cached query results
    pub queries: RwSignal<QueryCache>,
    /// API base URL; empty means same origin
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(ThemePreference::load(&BrowserStore)),
            current_user: RwSignal::new(None),
            queries: RwSignal::new(QueryCache::new()),
            api_base: RwSignal::new(String::new()),
        }
    }

    /// Keep the document's `dark` class in step with the theme signal.
    pub fn bind_theme_class(&self) {
        let theme = self.theme;
        Effect::new(move |_| apply_theme_class(theme.get().theme()));
    }

    pub fn current_theme(&self) -> Theme {
        self.theme.get().theme()
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|pref| {
            if let Err(e) = pref.toggle(&mut BrowserStore) {
                tracing::warn!("Theme changed but could not be saved: {}", e);
            }
        });
    }

    /// Fetch the current user unless a cached result exists.
    pub fn load_session(&self) {
        let cached = self
            .queries
            .with_untracked(|q| q.get(QueryKey::CurrentUser).cloned());
        if let Some(value) = cached {
            self.current_user
                .set(serde_json::from_value::<Option<User>>(value).ok().flatten());
            return;
        }
        self.refresh_session();
    }

    /// Fetch the current user, replacing any cached result.
    pub fn refresh_session(&self) {
        let state = *self;
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let user = api::fetch_current_user(&base).await;
            state.queries.update(|q| {
                q.insert(
                    QueryKey::CurrentUser,
                    serde_json::to_value(&user).unwrap_or_default(),
                )
            });
            state.current_user.set(user);
        });
    }

    /// Sign out, drop session-scoped queries, reload at `/`.
    ///
    /// Walks [`LogoutPlan::steps`] in order; a failed sign-out does not stop
    /// the later steps.
    pub fn logout(&self) {
        let state = *self;
        spawn_local(async move {
            let base = state.api_base.get_untracked();
            let mut sign_out: Result<(), String> = Ok(());

            for step in LogoutPlan::steps() {
                match step {
                    LogoutStep::SignOut { endpoint } => {
                        sign_out = api::logout(&base, endpoint).await;
                    }
                    LogoutStep::InvalidateSessionQueries => {
                        state.queries.update(|q| {
                            let removed = LogoutPlan::invalidate(q, &sign_out);
                            tracing::debug!("Cleared {} cached queries", removed.len());
                        });
                        state.current_user.set(None);
                    }
                    LogoutStep::Reload { path } => {
                        if let Err(e) = window().location().set_href(path) {
                            tracing::error!("Failed to reload after logout: {:?}", e);
                        }
                    }
                }
            }
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_theme_class(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root
        .class_list()
        .toggle_with_force(luca_core::theme::DARK_CLASS, theme.class_flag())
    {
        tracing::warn!("Failed to apply theme class: {:?}", e);
    }
}
