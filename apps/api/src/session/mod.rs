// Per-user session state: progress, chat history, quiz context.
// Handlers load a `Session`, mutate its state, and save it back before responding.

pub mod handlers;
pub mod progress;
pub mod store;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::models::ChatTurn;
use crate::session::progress::ProgressState;
use crate::session::store::{SessionError, SessionStore};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub progress: ProgressState,
    #[serde(default)]
    pub chat_history: Vec<ChatTurn>,
    /// Raw `interests` answer from the last quiz submission.
    #[serde(default)]
    pub programming_interest: Option<String>,
}

/// `?session_id=<uuid>`; a new session is minted when absent.
#[derive(Debug, Default, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<Uuid>,
}

/// A session loaded for the duration of one request.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    pub state: SessionState,
}

impl Session {
    /// Loads an existing session, or starts a fresh one when the id is
    /// missing, unknown, or expired.
    pub async fn load(store: &dyn SessionStore, id: Option<Uuid>) -> Result<Self, SessionError> {
        let Some(id) = id else {
            return Ok(Self::fresh());
        };
        let state = store.load(id).await?.unwrap_or_default();
        Ok(Self { id, state })
    }

    fn fresh() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: SessionState::default(),
        }
    }

    /// Stamps activity and writes the state back. Returns the session id.
    pub async fn save(mut self, store: &dyn SessionStore) -> Result<Uuid, SessionError> {
        self.state.progress.touch();
        store.save(self.id, &self.state).await?;
        Ok(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::MemorySessionStore;

    #[tokio::test]
    async fn test_missing_id_mints_new_session() {
        let store = MemorySessionStore::for_tests();
        let a = Session::load(&store, None).await.unwrap();
        let b = Session::load(&store, None).await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.state.chat_history.len(), 0);
    }

    #[tokio::test]
    async fn test_unknown_id_starts_empty_but_keeps_id() {
        let store = MemorySessionStore::for_tests();
        let id = Uuid::new_v4();
        let session = Session::load(&store, Some(id)).await.unwrap();
        assert_eq!(session.id, id);
        assert!(session.state.progress.badges.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_restores_state() {
        let store = MemorySessionStore::for_tests();
        let mut session = Session::load(&store, None).await.unwrap();
        session.state.programming_interest = Some("data".to_string());
        let id = session.save(&store).await.unwrap();

        let reloaded = Session::load(&store, Some(id)).await.unwrap();
        assert_eq!(reloaded.state.programming_interest.as_deref(), Some("data"));
    }

    #[test]
    fn test_state_deserializes_from_older_payload() {
        let state: SessionState = serde_json::from_str("{}").unwrap();
        assert!(state.chat_history.is_empty());
        assert!(state.programming_interest.is_none());
    }
}
