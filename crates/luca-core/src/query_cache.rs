//! Client-side query cache.
//!
//! Fetched resources are cached under a closed set of keys. Each key declares
//! whether its content depends on who is signed in, so logout removes exactly
//! those entries and leaves public data alone.

use std::collections::BTreeMap;

use serde_json::Value;

/// Identity of a cached resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QueryKey {
    /// `GET /api/auth/user`.
    CurrentUser,
    /// The signed-in user's conversation list.
    Conversations,
    /// Messages of the open conversation.
    ChatHistory,
    /// Admin dashboard counters.
    AdminStats,
    /// Marketing content, identical for every visitor.
    PublicContent,
}

impl QueryKey {
    /// All keys.
    pub const ALL: [QueryKey; 5] = [
        QueryKey::CurrentUser,
        QueryKey::Conversations,
        QueryKey::ChatHistory,
        QueryKey::AdminStats,
        QueryKey::PublicContent,
    ];

    /// Whether the resource depends on session identity.
    pub fn is_session_scoped(self) -> bool {
        !matches!(self, QueryKey::PublicContent)
    }

    /// Stable name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryKey::CurrentUser => "current_user",
            QueryKey::Conversations => "conversations",
            QueryKey::ChatHistory => "chat_history",
            QueryKey::AdminStats => "admin_stats",
            QueryKey::PublicContent => "public_content",
        }
    }
}

/// Cached query results keyed by [`QueryKey`].
#[derive(Debug, Clone, Default)]
pub struct QueryCache {
    entries: BTreeMap<QueryKey, Value>,
}

impl QueryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, replacing any previous one.
    pub fn insert(&mut self, key: QueryKey, value: Value) {
        self.entries.insert(key, value);
    }

    /// The cached result for `key`.
    pub fn get(&self, key: QueryKey) -> Option<&Value> {
        self.entries.get(&key)
    }

    /// Whether `key` has a cached result.
    pub fn contains(&self, key: QueryKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Drop a single entry.
    pub fn invalidate(&mut self, key: QueryKey) -> bool {
        self.entries.remove(&key).is_some()
    }

    /// Drop every session-scoped entry, returning the removed keys in key order.
    pub fn invalidate_session(&mut self) -> Vec<QueryKey> {
        let removed: Vec<QueryKey> = self
            .entries
            .keys()
            .copied()
            .filter(|key| key.is_session_scoped())
            .collect();

        for key in &removed {
            self.entries.remove(key);
        }

        tracing::debug!(
            removed = ?removed.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
            "Invalidated session-scoped queries"
        );
        removed
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
