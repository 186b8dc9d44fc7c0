//! Open editor sessions
//!
//! Sessions live in memory only. Each access refreshes the session's
//! last-touched time; sessions idle for longer than the configured timeout are
//! dropped by [`SessionStore::evict_idle`], which runs on every new session and
//! from the sweeper task spawned at startup.

use bureau_common::content::ContentSession;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, info};
use uuid::Uuid;

struct OpenSession {
    session: ContentSession,
    last_touched: Instant,
}

impl OpenSession {
    fn new(session: ContentSession) -> Self {
        Self {
            session,
            last_touched: Instant::now(),
        }
    }
}

/// Shared map of open sessions keyed by session id
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, OpenSession>>>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Add a session, dropping idle ones first
    pub async fn insert(&self, session: ContentSession) {
        self.evict_idle().await;
        let id = session.id();
        self.sessions.write().await.insert(id, OpenSession::new(session));
    }

    /// Run `f` against a session and mark it as touched
    ///
    /// `None` when no session has this id.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut ContentSession) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        let open = sessions.get_mut(&id)?;
        open.last_touched = Instant::now();
        Some(f(&mut open.session))
    }

    /// Take a session out of the store
    pub async fn remove(&self, id: Uuid) -> Option<ContentSession> {
        self.sessions.write().await.remove(&id).map(|open| open.session)
    }

    /// Put back a session taken with [`remove`](Self::remove)
    pub async fn restore(&self, session: ContentSession) {
        let id = session.id();
        self.sessions.write().await.insert(id, OpenSession::new(session));
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    /// Drop sessions idle for at least the timeout; returns how many went
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();

        sessions.retain(|id, open| {
            let keep = open.last_touched.elapsed() < self.idle_timeout;
            if !keep {
                info!(
                    "Dropping idle session {} for page {} ({} unsaved changes)",
                    id,
                    open.session.page(),
                    open.session.modified_keys().len()
                );
            }
            keep
        });

        before - sessions.len()
    }

    /// Periodically evict idle sessions until the runtime shuts down
    pub fn spawn_sweeper(&self, period: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut tick = interval(period);
            loop {
                tick.tick().await;
                let evicted = store.evict_idle().await;
                if evicted > 0 {
                    debug!("Session sweep dropped {} sessions", evicted);
                }
            }
        })
    }
}
