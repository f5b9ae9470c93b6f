//! In-process store of live query sessions

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use core_kernel::SessionId;
use domain_claims::QuerySession;

use crate::error::ApiError;

#[derive(Debug)]
struct StoredSession {
    session: QuerySession,
    last_access: DateTime<Utc>,
}

/// Query sessions keyed by id, bounded by `capacity`
///
/// Every access refreshes a session's idle clock. Sessions idle for at least
/// `idle_timeout` are evicted when a new session needs room.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, StoredSession>>>,
    capacity: usize,
    idle_timeout: TimeDelta,
}

impl SessionStore {
    pub fn new(capacity: usize, idle_timeout: TimeDelta) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            capacity,
            idle_timeout,
        }
    }

    /// Registers a session, failing with `Conflict` when the store is full of
    /// active sessions
    pub async fn insert(&self, session: QuerySession) -> Result<SessionId, ApiError> {
        self.insert_at(session, Utc::now()).await
    }

    pub(crate) async fn insert_at(
        &self,
        session: QuerySession,
        now: DateTime<Utc>,
    ) -> Result<SessionId, ApiError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.capacity {
            let evicted = evict_idle(&mut sessions, now, self.idle_timeout);
            if evicted > 0 {
                info!(evicted, live = sessions.len(), "Evicted idle query sessions");
            }
        }
        if sessions.len() >= self.capacity {
            return Err(ApiError::Conflict(format!(
                "Session limit of {} reached",
                self.capacity
            )));
        }

        let id = SessionId::new_v7();
        sessions.insert(id, StoredSession { session, last_access: now });
        info!(session_id = %id, live = sessions.len(), "Query session created");
        Ok(id)
    }

    /// Runs `f` against a session without modifying it
    pub async fn read<F, R>(&self, id: SessionId, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&QuerySession) -> R,
    {
        let mut sessions = self.sessions.write().await;
        let stored = touch(&mut sessions, id, Utc::now())?;
        Ok(f(&stored.session))
    }

    /// Runs `f` against a session under the write lock
    pub async fn update<F, R>(&self, id: SessionId, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut QuerySession) -> Result<R, ApiError>,
    {
        let mut sessions = self.sessions.write().await;
        let stored = touch(&mut sessions, id, Utc::now())?;
        let result = f(&mut stored.session);
        debug!(session_id = %id, ok = result.is_ok(), "Query session updated");
        result
    }

    pub async fn remove(&self, id: SessionId) -> Result<(), ApiError> {
        let mut sessions = self.sessions.write().await;
        if sessions.remove(&id).is_none() {
            return Err(ApiError::session_not_found(id));
        }
        info!(session_id = %id, live = sessions.len(), "Query session closed");
        Ok(())
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

fn touch(
    sessions: &mut HashMap<SessionId, StoredSession>,
    id: SessionId,
    now: DateTime<Utc>,
) -> Result<&mut StoredSession, ApiError> {
    let stored = sessions
        .get_mut(&id)
        .ok_or_else(|| ApiError::session_not_found(id))?;
    stored.last_access = now;
    Ok(stored)
}

fn evict_idle(
    sessions: &mut HashMap<SessionId, StoredSession>,
    now: DateTime<Utc>,
    idle_timeout: TimeDelta,
) -> usize {
    let before = sessions.len();
    sessions.retain(|_, stored| now.signed_duration_since(stored.last_access) < idle_timeout);
    before - sessions.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> QuerySession {
        QuerySession::with_default_page_size(Arc::from(Vec::new()))
    }

    fn store(capacity: usize) -> SessionStore {
        SessionStore::new(capacity, TimeDelta::minutes(30))
    }

    #[tokio::test]
    async fn test_capacity_is_enforced() {
        let store = store(1);
        store.insert(session()).await.unwrap();

        assert!(matches!(store.insert(session()).await, Err(ApiError::Conflict(_))));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_session() {
        let store = store(4);
        let id = store.insert(session()).await.unwrap();

        store.remove(id).await.unwrap();
        assert!(store.is_empty().await);
        assert!(matches!(store.remove(id).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_idle_session_evicted_for_new_one() {
        let store = store(1);
        let opened = Utc::now() - TimeDelta::hours(2);
        let stale = store.insert_at(session(), opened).await.unwrap();

        let fresh = store.insert(session()).await.unwrap();

        assert_eq!(store.len().await, 1);
        assert!(store.read(fresh, |_| ()).await.is_ok());
        assert!(matches!(store.read(stale, |_| ()).await, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_access_keeps_session_alive() {
        let store = store(2);
        let now = Utc::now();
        let kept = store.insert_at(session(), now - TimeDelta::hours(2)).await.unwrap();
        let idle = store.insert_at(session(), now - TimeDelta::hours(2)).await.unwrap();

        store.update(kept, |_| Ok(())).await.unwrap();
        store.insert(session()).await.unwrap();

        assert_eq!(store.len().await, 2);
        assert!(store.read(kept, |_| ()).await.is_ok());
        assert!(store.read(idle, |_| ()).await.is_err());
    }

    #[tokio::test]
    async fn test_active_sessions_are_not_evicted() {
        let store = store(1);
        let recent = store
            .insert_at(session(), Utc::now() - TimeDelta::minutes(5))
            .await
            .unwrap();

        assert!(matches!(store.insert(session()).await, Err(ApiError::Conflict(_))));
        assert!(store.read(recent, |_| ()).await.is_ok());
    }
}
