//! Session persistence. Values are whole `SessionState`s; callers load at the
//! start of a request and save at the end, so concurrent requests on one
//! session are last-write-wins.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;
use uuid::Uuid;

use crate::session::SessionState;

const KEY_PREFIX: &str = "navigator:session:";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Session encoding error: {0}")]
    Codec(#[from] serde_json::Error),
}

/// Carried in `AppState` as `Arc<dyn SessionStore>`.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn load(&self, id: Uuid) -> Result<Option<SessionState>, SessionError>;
    async fn save(&self, id: Uuid, state: &SessionState) -> Result<(), SessionError>;
}

/// Sessions as JSON strings in Redis, expiring `ttl_secs` after the last save.
pub struct RedisSessionStore {
    client: redis::Client,
    ttl_secs: u64,
}

impl RedisSessionStore {
    pub fn new(client: redis::Client, ttl_secs: u64) -> Self {
        Self { client, ttl_secs }
    }
}

fn key(id: Uuid) -> String {
    format!("{KEY_PREFIX}{id}")
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn load(&self, id: Uuid) -> Result<Option<SessionState>, SessionError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<String> = redis::cmd("GET")
            .arg(key(id))
            .query_async(&mut conn)
            .await?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => {
                debug!("No stored session {id}");
                Ok(None)
            }
        }
    }

    async fn save(&self, id: Uuid, state: &SessionState) -> Result<(), SessionError> {
        let json = serde_json::to_string(state)?;
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        redis::cmd("SET")
            .arg(key(id))
            .arg(json)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async::<_, ()>(&mut conn)
            .await?;
        Ok(())
    }
}

/// Process-local sessions, expiring `ttl` after the last save like the Redis
/// store. Expired entries are dropped on the next load of that id and swept
/// on every save.
pub struct MemorySessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<Uuid, StoredSession>>,
}

struct StoredSession {
    state: SessionState,
    expires_at: Instant,
}

impl MemorySessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }
}

#[cfg(test)]
impl MemorySessionStore {
    /// Store with a TTL no test outlives.
    pub fn for_tests() -> Self {
        Self::new(Duration::from_secs(3600))
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, id: Uuid) -> Result<Option<SessionState>, SessionError> {
        let now = Instant::now();
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&id) {
                None => return Ok(None),
                Some(stored) if stored.expires_at > now => {
                    return Ok(Some(stored.state.clone()))
                }
                Some(_) => {}
            }
        }

        let mut sessions = self.sessions.write().await;
        if sessions.get(&id).is_some_and(|s| s.expires_at <= now) {
            sessions.remove(&id);
            debug!("Session {id} expired");
        }
        Ok(None)
    }

    async fn save(&self, id: Uuid, state: &SessionState) -> Result<(), SessionError> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        sessions.retain(|_, stored| stored.expires_at > now);
        sessions.insert(
            id,
            StoredSession {
                state: state.clone(),
                expires_at: now + self.ttl,
            },
        );
        Ok(())
    }
}
