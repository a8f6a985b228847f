use super::state::{SessionDefaults, SessionState};
use clru::CLruCache;
use std::num::NonZeroUsize;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

/// Default number of sessions kept in memory.
pub const DEFAULT_MAX_SESSIONS: usize = 1024;

/// In-memory sessions, keyed by a random id.
///
/// Bounded: once full, creating a session evicts the least recently used one.
/// The lock is only held for synchronous state updates.
pub struct SessionStore {
    sessions: Mutex<CLruCache<Uuid, SessionState>>,
    defaults: SessionDefaults,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(
            NonZeroUsize::new(DEFAULT_MAX_SESSIONS).unwrap_or(NonZeroUsize::MIN),
            SessionDefaults::default(),
        )
    }
}

impl SessionStore {
    pub fn new(capacity: NonZeroUsize, defaults: SessionDefaults) -> Self {
        Self {
            sessions: Mutex::new(CLruCache::new(capacity)),
            defaults,
        }
    }

    /// Start a new session and return its id with a snapshot of its state.
    pub async fn create(&self) -> (Uuid, SessionState) {
        let session_id = Uuid::new_v4();
        let state = SessionState::new(&self.defaults);

        let mut sessions = self.sessions.lock().await;
        if sessions.is_full() {
            debug!("Session store full, evicting the least recently used session");
        }
        sessions.put(session_id, state.clone());
        debug!("Created session {}", session_id);

        (session_id, state)
    }

    /// Run `f` on the session state. Returns `None` for an unknown session.
    pub async fn with_session<R>(
        &self,
        session_id: &Uuid,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.lock().await;
        sessions.get_mut(session_id).map(f)
    }

    /// End a session. Returns false if it did not exist.
    pub async fn remove(&self, session_id: &Uuid) -> bool {
        let removed = self.sessions.lock().await.pop(session_id).is_some();
        if removed {
            debug!("Removed session {}", session_id);
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
