//! In-memory session store keyed by user id.
//!
//! ## Thread Safety
//!
//! The store uses `Arc<RwLock<>>` so clones share one map across dispatcher tasks.
//! Multi-step read-modify-write sequences for one user are serialized by [`super::UserLocks`].

use std::collections::HashMap;
use std::sync::Arc;

use prompt::ChatMessage;
use tokio::sync::RwLock;
use tracing::debug;

use super::ModelTier;

/// Most recent turns kept per user.
pub const MAX_TURNS: usize = 20;

/// Conversation state of one user: chronological turns and selected tier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub turns: Vec<ChatMessage>,
    pub model_tier: ModelTier,
}

impl Session {
    /// Appends a user turn, then drops the oldest turns beyond [`MAX_TURNS`].
    fn push_user_turn(&mut self, content: &str) {
        self.turns.push(ChatMessage::user(content));
        if self.turns.len() > MAX_TURNS {
            let excess = self.turns.len() - MAX_TURNS;
            self.turns.drain(..excess);
        }
    }

    /// Appends an assistant turn without trimming; the next user turn trims.
    fn push_assistant_turn(&mut self, content: &str) {
        self.turns.push(ChatMessage::assistant(content));
    }
}

/// Process-wide session map. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<i64, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the user's session, creating an empty default one if absent.
    pub async fn get_or_create(&self, user_id: i64) -> Session {
        let mut sessions = self.sessions.write().await;
        sessions.entry(user_id).or_default().clone()
    }

    /// Snapshot without creating an entry.
    pub async fn get(&self, user_id: i64) -> Option<Session> {
        self.sessions.read().await.get(&user_id).cloned()
    }

    /// Removes the user's session; returns how many turns it held (0 if there was none).
    pub async fn clear(&self, user_id: i64) -> usize {
        let removed = self.sessions.write().await.remove(&user_id);
        let count = removed.map(|s| s.turns.len()).unwrap_or(0);
        debug!(user_id = user_id, cleared_turns = count, "Session cleared");
        count
    }

    /// Sets the tier on the (lazily created) session.
    pub async fn set_model(&self, user_id: i64, tier: ModelTier) {
        let mut sessions = self.sessions.write().await;
        sessions.entry(user_id).or_default().model_tier = tier;
    }

    /// Appends a user turn, trims to [`MAX_TURNS`] and returns the resulting snapshot.
    pub async fn push_user_turn(&self, user_id: i64, content: &str) -> Session {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(user_id).or_default();
        session.push_user_turn(content);
        session.clone()
    }

    pub async fn push_assistant_turn(&self, user_id: i64, content: &str) {
        let mut sessions = self.sessions.write().await;
        sessions.entry(user_id).or_default().push_assistant_turn(content);
    }

    /// Number of active sessions.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
