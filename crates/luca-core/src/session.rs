//! Current-user identity.
//!
//! The navigation shell and header read the signed-in user from
//! `GET /api/auth/user`. While that resource is absent (still loading, signed
//! out, or the request failed) they show a placeholder admin identity.

use serde::{Deserialize, Serialize};

/// Display name shown when no user is signed in.
pub const FALLBACK_NAME: &str = "Admin";

/// Initials shown when no user is signed in.
pub const FALLBACK_INITIALS: &str = "AD";

/// The user record returned by the session endpoint.
///
/// Extra fields sent by the server are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name, e.g. "Jane Doe".
    pub name: String,
    /// Account email.
    pub email: String,
}

/// What the shell renders for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    /// Name shown next to the avatar.
    pub display_name: String,
    /// Email, when a user is signed in.
    pub email: Option<String>,
    /// Avatar initials.
    pub initials: String,
}

impl SessionIdentity {
    /// Build the identity for an optional user.
    pub fn from_user(user: Option<&User>) -> Self {
        match user {
            Some(user) => Self {
                display_name: user.name.clone(),
                email: Some(user.email.clone()),
                initials: initials(&user.name),
            },
            None => Self::fallback(),
        }
    }

    /// The placeholder identity.
    pub fn fallback() -> Self {
        Self {
            display_name: FALLBACK_NAME.to_string(),
            email: None,
            initials: FALLBACK_INITIALS.to_string(),
        }
    }

    /// Whether this identity belongs to a real user.
    pub fn is_authenticated(&self) -> bool {
        self.email.is_some()
    }
}

impl Default for SessionIdentity {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Uppercased first letters of the first two whitespace-separated tokens.
///
/// A name with no tokens yields the fallback initials.
pub fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .take(2)
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        FALLBACK_INITIALS.to_string()
    } else {
        letters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Jane Doe", "JD")]
    #[case("jane doe", "JD")]
    #[case("Ada", "A")]
    #[case("Mary Ann Evans", "MA")]
    #[case("  spaced   out  ", "SO")]
    #[case("émile zola", "ÉZ")]
    fn test_initials(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(initials(name), expected);
    }

    #[test]
    fn test_blank_name_uses_fallback_initials() {
        assert_eq!(initials(""), "AD");
        assert_eq!(initials("   \t "), "AD");
    }

    #[test]
    fn test_identity_without_user() {
        let identity = SessionIdentity::from_user(None);
        assert_eq!(identity.display_name, "Admin");
        assert_eq!(identity.initials, "AD");
        assert!(identity.email.is_none());
        assert!(!identity.is_authenticated());
    }

    #[test]
    fn test_identity_with_user() {
        let user = User {
            name: "Grace Hopper".to_string(),
            email: "grace@example.com".to_string(),
        };
        let identity = SessionIdentity::from_user(Some(&user));
        assert_eq!(identity.display_name, "Grace Hopper");
        assert_eq!(identity.initials, "GH");
        assert_eq!(identity.email.as_deref(), Some("grace@example.com"));
        assert!(identity.is_authenticated());
    }

    #[test]
    fn test_user_ignores_extra_fields() {
        let json = r#"{"id":"u1","name":"Jane Doe","email":"jane@example.com","role":"admin"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Jane Doe");
        assert_eq!(user.email, "jane@example.com");
    }
}
