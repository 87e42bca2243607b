//! Per-session "current challenge" storage.
//!
//! The transport hands every call an opaque [`SessionId`] (its conversation
//! identity); nothing here depends on any framework context object. Each
//! session holds at most one in-play character: `put` overwrites, `get`
//! after `clear` is absent, and absent means "expired or never started" —
//! a user-visible restart prompt, not an internal error.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

use gom_core::CharacterId;

/// Opaque session identifier supplied by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    /// Wrap a transport-supplied identity.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl From<&str> for SessionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A challenge waiting for its answer.
#[derive(Debug, Clone, Copy)]
struct Pending {
    character: CharacterId,
    touched_at: DateTime<Utc>,
}

/// Holds, per active session, the character currently in play.
///
/// Operations on one session serialize through the inner mutex; distinct
/// sessions need no coordination beyond that.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Mutex<HashMap<SessionId, Pending>>,
}

impl SessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the in-play character for a session, replacing any previous
    /// one.
    pub fn put(&self, session: &SessionId, character: CharacterId) {
        self.entries().insert(
            session.clone(),
            Pending {
                character,
                touched_at: Utc::now(),
            },
        );
    }

    /// The in-play character, if the session has one.
    pub fn get(&self, session: &SessionId) -> Option<CharacterId> {
        self.entries().get(session).map(|p| p.character)
    }

    /// Remove the session's entry, returning the character it held.
    pub fn clear(&self, session: &SessionId) -> Option<CharacterId> {
        self.entries().remove(session).map(|p| p.character)
    }

    /// Number of sessions with a pending challenge.
    pub fn len(&self) -> usize {
        self.entries().len()
    }

    /// True if no session has a pending challenge.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Drop sessions idle for longer than `max_idle`, returning how many
    /// were dropped.
    ///
    /// The engine never evicts on its own; a long-running host calls this
    /// periodically to bound growth from sessions that began a round and
    /// never answered.
    pub fn evict_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now() - max_idle;
        let mut entries = self.entries();
        let before = entries.len();
        entries.retain(|_, pending| pending.touched_at > cutoff);
        before - entries.len()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<SessionId, Pending>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
