//! Admin navigation shell.
//!
//! Route highlighting is an exact string comparison: child routes never
//! light up their parent section.

use crate::api::LOGOUT_PATH;
use crate::query_cache::{QueryCache, QueryKey};

/// A single entry in the admin sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Text shown in the sidebar.
    pub label: &'static str,
    /// Route the entry links to.
    pub href: &'static str,
}

impl NavItem {
    /// Whether this entry is the current route.
    pub fn is_active(&self, current_path: &str) -> bool {
        is_active(current_path, self.href)
    }
}

/// The fixed admin route table, in display order.
pub static ADMIN_NAV: [NavItem; 5] = [
    NavItem {
        label: "Dashboard",
        href: "/admin",
    },
    NavItem {
        label: "Conversations",
        href: "/admin/conversations",
    },
    NavItem {
        label: "Users",
        href: "/admin/users",
    },
    NavItem {
        label: "Documents",
        href: "/admin/documents",
    },
    NavItem {
        label: "Settings",
        href: "/admin/settings",
    },
];

/// Exact path match.
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// The admin entry matching `current_path`, if any.
pub fn active_item(current_path: &str) -> Option<&'static NavItem> {
    ADMIN_NAV.iter().find(|item| item.is_active(current_path))
}

/// One step of the logout sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoutStep {
    /// Ask the server to end the session.
    SignOut {
        /// Endpoint receiving the `POST`.
        endpoint: &'static str,
    },
    /// Drop cached queries that depend on who is signed in.
    InvalidateSessionQueries,
    /// Full page load of the given path.
    Reload {
        /// Target path.
        path: &'static str,
    },
}

/// The logout sequence run by the navigation shell.
///
/// The outcome of the sign-out request never changes the rest of the
/// sequence: client state is cleared and the page reloads regardless.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogoutPlan;

impl LogoutPlan {
    /// Path loaded after logout.
    pub const REDIRECT_PATH: &'static str = "/";

    /// The steps in execution order.
    pub fn steps() -> [LogoutStep; 3] {
        [
            LogoutStep::SignOut {
                endpoint: LOGOUT_PATH,
            },
            LogoutStep::InvalidateSessionQueries,
            LogoutStep::Reload {
                path: Self::REDIRECT_PATH,
            },
        ]
    }

    /// Run [`LogoutStep::InvalidateSessionQueries`] once the sign-out
    /// request has settled, whatever its outcome.
    ///
    /// Returns the invalidated keys.
    pub fn invalidate<E: std::fmt::Display>(
        cache: &mut QueryCache,
        sign_out: &std::result::Result<(), E>,
    ) -> Vec<QueryKey> {
        if let Err(e) = sign_out {
            tracing::warn!("Sign-out request failed, clearing local session anyway: {}", e);
        }
        cache.invalidate_session()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case("/admin", "Dashboard")]
    #[case("/admin/conversations", "Conversations")]
    #[case("/admin/users", "Users")]
    #[case("/admin/documents", "Documents")]
    #[case("/admin/settings", "Settings")]
    fn test_exactly_one_active_on_exact_match(#[case] path: &str, #[case] label: &str) {
        let active: Vec<_> = ADMIN_NAV.iter().filter(|i| i.is_active(path)).collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].label, label);
        assert_eq!(active_item(path).map(|i| i.label), Some(label));
    }

    #[rstest]
    #[case("/")]
    #[case("/admin/")]
    #[case("/admin/users/42")]
    #[case("/ADMIN")]
    #[case("/chat")]
    fn test_no_active_for_unmatched_path(#[case] path: &str) {
        assert!(ADMIN_NAV.iter().all(|i| !i.is_active(path)));
        assert!(active_item(path).is_none());
    }

    #[test]
    fn test_child_route_does_not_highlight_parent() {
        assert!(!is_active("/admin/users", "/admin"));
        assert!(!is_active("/admin/users/42", "/admin/users"));
    }

    #[test]
    fn test_logout_steps_order() {
        let steps = LogoutPlan::steps();
        assert_eq!(
            steps[0],
            LogoutStep::SignOut {
                endpoint: "/api/auth/logout"
            }
        );
        assert_eq!(steps[1], LogoutStep::InvalidateSessionQueries);
        assert_eq!(steps[2], LogoutStep::Reload { path: "/" });
    }

    #[test]
    fn test_failed_sign_out_still_clears_and_redirects() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::CurrentUser, json!({"name": "Jane Doe"}));
        cache.insert(QueryKey::PublicContent, json!({"hero": "Welcome"}));

        let removed = LogoutPlan::invalidate(&mut cache, &Err("network down"));

        assert_eq!(removed, vec![QueryKey::CurrentUser]);
        assert!(!cache.contains(QueryKey::CurrentUser));
        assert!(cache.contains(QueryKey::PublicContent));
    }

    #[test]
    fn test_successful_sign_out() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::Conversations, json!([]));

        let removed = LogoutPlan::invalidate::<String>(&mut cache, &Ok(()));

        assert_eq!(removed, vec![QueryKey::Conversations]);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_walking_steps_after_failed_sign_out() {
        let mut cache = QueryCache::new();
        cache.insert(QueryKey::CurrentUser, json!({"name": "Jane Doe"}));
        cache.insert(QueryKey::AdminStats, json!({"users": 3}));
        cache.insert(QueryKey::PublicContent, json!({"hero": "Welcome"}));

        let mut sign_out: std::result::Result<(), String> = Ok(());
        let mut posted_to = None;
        let mut reloaded_to = None;
        let mut cleared = Vec::new();

        for step in LogoutPlan::steps() {
            match step {
                LogoutStep::SignOut { endpoint } => {
                    posted_to = Some(endpoint);
                    sign_out = Err("503 Service Unavailable".to_string());
                }
                LogoutStep::InvalidateSessionQueries => {
                    cleared = LogoutPlan::invalidate(&mut cache, &sign_out);
                }
                LogoutStep::Reload { path } => {
                    assert!(!cache.contains(QueryKey::CurrentUser));
                    reloaded_to = Some(path);
                }
            }
        }

        assert_eq!(posted_to, Some("/api/auth/logout"));
        assert_eq!(cleared, vec![QueryKey::CurrentUser, QueryKey::AdminStats]);
        assert_eq!(reloaded_to, Some(LogoutPlan::REDIRECT_PATH));
        assert!(cache.contains(QueryKey::PublicContent));
    }
}
